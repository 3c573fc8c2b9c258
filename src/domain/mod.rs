// Domain layer: the catalog entity, the per-request query, and the ports the front end plugs into.

pub mod model;
pub mod ports;
