//! policyscan-web — HTTP surface for the privacy-policy analyzer.
//!   - POST   /api/analyze          analyse pasted policy text
//!   - POST   /api/identify         guess company and policy title
//!   - POST   /api/parse-document   extract text from a .txt / .pdf upload
//!   - GET    /api/history          recent analyses, newest first
//!   - DELETE /api/history          forget all analyses
//!   - GET    /health               liveness and upstream status

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod service;
pub mod state;
