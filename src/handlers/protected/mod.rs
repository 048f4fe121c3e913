// handlers/protected/mod.rs - handlers that require an authenticated session
//
// Every handler here takes an `AuthContext` extractor, which rejects anonymous requests with 401
// before the handler body (and therefore any query) runs. Data access goes through
// `with_tenant` with the tenant taken from that context, never from the request.
pub mod example;

pub use example::create as example_create;
pub use example::list as example_list;
