pub mod board_grid;
pub mod button;
pub mod caller_panel;
pub mod header;
pub mod lives_bar;
pub mod playing_card;
pub mod result_overlay;
pub mod toast_stack;
