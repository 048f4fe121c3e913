// handlers/mod.rs - two security tiers
//
// Public (no auth or optional auth) → Protected (session required)
pub mod public; // Health probes, logout redirect, server-rendered pages
pub mod protected; // Tenant data API (/api/example)
