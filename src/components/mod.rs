// ABOUTME: UI components for the TUI interface: catalog grid, wizard overlay, and help

pub mod catalog_grid;
pub mod help;
pub mod layout;
pub mod wizard;

pub use catalog_grid::CatalogGridComponent;
pub use help::HelpComponent;
pub use layout::LayoutComponent;
pub use wizard::WizardComponent;
