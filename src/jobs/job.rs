use url::Url;

/// Request shape of a job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JobKind {
    /// Plain `GET` without a body.
    Read,
    /// `POST` carrying `payload` as the body.
    Write { payload: String },
}

/// One planned request. Jobs are never mutated; randomization produces a copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    target: Url,
    kind: JobKind,
}

impl Job {
    #[must_use]
    pub const fn read(target: Url) -> Self {
        Self {
            target,
            kind: JobKind::Read,
        }
    }

    #[must_use]
    pub const fn write(target: Url, payload: String) -> Self {
        Self {
            target,
            kind: JobKind::Write { payload },
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Url {
        &self.target
    }

    #[must_use]
    pub const fn kind(&self) -> &JobKind {
        &self.kind
    }

    #[must_use]
    pub const fn is_write(&self) -> bool {
        matches!(self.kind, JobKind::Write { .. })
    }

    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        match &self.kind {
            JobKind::Write { payload } => Some(payload),
            JobKind::Read => None,
        }
    }

    /// Copy of this job with a replaced write payload. Read jobs are returned unchanged.
    #[must_use]
    pub fn with_payload(&self, payload: String) -> Self {
        match self.kind {
            JobKind::Write { .. } => Self::write(self.target.clone(), payload),
            JobKind::Read => self.clone(),
        }
    }
}
