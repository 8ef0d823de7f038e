pub mod phase_view;
pub mod sweep_plots;
