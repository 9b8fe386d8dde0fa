//! Error macros for adjgraph

/// Macro for creating invalid value errors
#[macro_export]
macro_rules! bail_invalid {
    ($context:expr, $value:expr) => {
        return Err($crate::error::GraphError::invalid_value($context, $value))
    };
}

/// Macro for rejecting a vertex id outside `[0, vertex_count)`
#[macro_export]
macro_rules! ensure_vertex {
    ($vertex:expr, $vertex_count:expr) => {
        if $vertex >= $vertex_count {
            return Err($crate::error::GraphError::out_of_range(
                $vertex,
                $vertex_count,
            ));
        }
    };
}
