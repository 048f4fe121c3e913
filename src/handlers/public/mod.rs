// handlers/public/mod.rs - endpoints that never reject anonymous callers
//
// Pages resolve the session optionally and fall back to a placeholder view.
pub mod health;
pub mod logout;
pub mod pages;
