//! Tab bookkeeping for the editor area
//!
//! - `manager` - open tabs, selection and the page list
//! - `reconcile` - selection repair after tabs close
//! - `menu` - which tab context menu entries apply

pub mod manager;
pub mod menu;
pub mod reconcile;

pub use manager::TabManager;
pub use menu::TabMenu;
pub use reconcile::HOME_PATH;
