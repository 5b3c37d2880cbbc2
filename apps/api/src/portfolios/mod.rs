// Portfolio persistence and delivery: CRUD over the portfolios table plus the
// download and preview endpoints. Generated bundles are never stored — every
// download and preview recomputes from the record's ResumeData blob.

pub mod handlers;
