//! Shared UI components

pub mod app_layout;
pub mod button;
pub mod camera_detail;
pub mod camera_grid;
pub mod camera_tile;
pub mod expanded_camera;
pub mod helpers;
pub mod icons;
pub mod media;
pub mod nav_label;

pub use app_layout::AppLayoutView;
pub use button::{ButtonVariant, ChromelessButton, IconButton, IconKind};
pub use camera_detail::CameraDetailView;
pub use camera_grid::CameraGridView;
pub use camera_tile::CameraTile;
pub use expanded_camera::ExpandedCameraView;
pub use helpers::{BackButton, ErrorDisplay, LoadingSpinner, PageContainer};
pub use icons::{ArrowLeftIcon, CameraIcon, ExpandIcon, XIcon};
pub use media::{FitMode, MediaView};
pub use nav_label::NavLabel;
