#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0}")]
    Generic(String),

    /// The caller submitted an empty snippet. Rejected before any upstream
    /// call is made.
    #[error("No code provided")]
    NoCode,

    #[error("Network error: {0}")]
    Network(String),

    /// The upstream completion API answered with a non-2xx status. The body
    /// is kept verbatim so it can be relayed to the caller.
    #[error("Upstream error {status}: {body}")]
    Upstream { status: u16, body: String },
}
