//! Error types for the Kruskal core library.
//!
//! Defines the validation error raised by mutating graph operations together
//! with its stable machine-readable code and a convenient result alias.

use std::fmt;

use thiserror::Error;

use crate::edge::VertexId;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// An error produced while mutating a [`crate::Graph`].
///
/// Rejected mutations leave the graph untouched: the edge set, the vertex
/// count and the cached forest are exactly as they were before the call.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// An edge endpoint lies outside `0..vertex_count`.
    #[error("edge ({from}, {to}) references vertex {vertex}, but vertex_count is {vertex_count}")]
    OutOfRangeVertex {
        /// The offending endpoint.
        vertex: VertexId,
        /// The edge's `from` endpoint as supplied.
        from: VertexId,
        /// The edge's `to` endpoint as supplied.
        to: VertexId,
        /// The vertex count the edge was validated against.
        vertex_count: usize,
    },
}

define_error_codes! {
    /// Machine-readable error codes for [`GraphError`].
    enum GraphErrorCode for GraphError {
        /// An edge endpoint lies outside the vertex range.
        OutOfRangeVertex => OutOfRangeVertex { .. } => "OUT_OF_RANGE_VERTEX",
    }
}

/// Convenient result alias for graph mutations.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_vertex_reports_stable_code() {
        let err = GraphError::OutOfRangeVertex {
            vertex: 7,
            from: 0,
            to: 7,
            vertex_count: 3,
        };
        assert_eq!(err.code(), GraphErrorCode::OutOfRangeVertex);
        assert_eq!(err.code().as_str(), "OUT_OF_RANGE_VERTEX");
        assert_eq!(
            err.to_string(),
            "edge (0, 7) references vertex 7, but vertex_count is 3"
        );
    }
}
