/// Alias for `Result<T, WebError>`.
pub type WebResult<T> = Result<T, WebError>;

/// Errors that stop the server.
#[derive(Debug, thiserror::Error)]
pub enum WebError {
    /// The listening socket could not be bound.
    #[error("no se pudo escuchar en {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: String,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// The server stopped with an IO error.
    #[error("error del servidor: {0}")]
    Serve(#[from] std::io::Error),
}
