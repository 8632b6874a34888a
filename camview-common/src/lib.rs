mod camera_path;
mod contract;

pub use camera_path::{camera_path, slug_from_path, slugify, CAMERA_ROUTE_PREFIX};
pub use contract::{check_required, ContractMode, ContractViolation};
