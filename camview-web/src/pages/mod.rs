mod camera_detail;
mod cameras;
mod layout;

pub use camera_detail::CameraDetail;
pub use cameras::Cameras;
pub use layout::AppLayout;
