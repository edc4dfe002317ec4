pub mod card_grid;
pub mod yw_modal;
