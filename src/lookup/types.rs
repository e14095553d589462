//! Response shape of the computation service.
//!
//! Only the fields needed to pull out the primary answer are modelled;
//! everything else in the payload is ignored.

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct QueryResponse {
    pub queryresult: QueryResult,
}

#[derive(Debug, Clone, Deserialize)]
pub struct QueryResult {
    /// Absent when the service could not interpret the query.
    #[serde(default)]
    pub pods: Vec<Pod>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Pod {
    #[serde(default)]
    pub primary: Option<bool>,
    #[serde(default)]
    pub subpods: Vec<SubPod>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubPod {
    #[serde(default)]
    pub plaintext: String,
}

impl QueryResponse {
    /// Plain text of the first subpod of the first pod marked primary.
    pub fn primary_plaintext(&self) -> Option<&str> {
        self.queryresult
            .pods
            .iter()
            .find(|pod| pod.primary == Some(true))?
            .subpods
            .first()
            .map(|subpod| subpod.plaintext.as_str())
    }

    /// The primary answer parsed as a base-10 integer.
    pub fn primary_answer(&self) -> Option<i64> {
        self.primary_plaintext()?.trim().parse().ok()
    }
}
