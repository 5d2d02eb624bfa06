pub mod prize_card;
pub mod ready_screen;
pub mod result_screen;
pub mod reveal_screen;
pub mod shuffle_flow;
pub mod terms_notice;
