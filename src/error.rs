use thiserror::Error;

/// Failure modes of a single analysis invocation.
///
/// Acquisition and projection failures are fatal: no partial result is
/// meaningful without a valid reserve zone. A per-building degenerate
/// geometry is deliberately not represented here: such footprints are
/// skipped, counted, and reported on the result, so one malformed record
/// cannot void the whole batch. An empty building layer is not an error
/// either; it produces a valid empty outcome.
#[derive(Debug, Error)]
pub enum EncroachmentError {
    /// The upstream data provider could not supply geometry for the place.
    /// Never retried by the core; transient-failure handling belongs to the
    /// acquisition boundary.
    #[error("acquisition failed for {place:?}: {reason}")]
    Acquisition { place: String, reason: String },

    /// No road segments matched the request. Fatal: without a centerline
    /// there is nothing to buffer.
    #[error("no road segments in input, cannot build a reserve zone")]
    NoRoad,

    /// A CRS could not be constructed, or a coordinate failed to transform.
    #[error("projection failed: {0}")]
    Projection(String),

    /// Reserve buffers only make sense for strictly positive half-widths.
    #[error("buffer distance must be positive, got {0}")]
    InvalidBufferDistance(f64),
}
