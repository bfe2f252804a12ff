pub mod flash;
pub mod routes;
