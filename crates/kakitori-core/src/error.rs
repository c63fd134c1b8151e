#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectError {
    /// A range clause with more than two dash-separated endpoints.
    #[error("malformed clause: {0:?}")]
    MalformedClause(String),

    /// A range endpoint that is neither a grade number, "S", nor a kanken
    /// level after scale normalization.
    #[error("unrecognized endpoint {endpoint:?} in clause {clause:?}")]
    BadEndpoint { clause: String, endpoint: String },
}
