pub mod field_map;

#[cfg(feature = "viewer")]
pub mod gravsim_vis2d;
