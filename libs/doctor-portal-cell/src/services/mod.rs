pub mod portal;

pub use portal::PortalService;
