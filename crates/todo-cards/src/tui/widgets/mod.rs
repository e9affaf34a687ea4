pub(super) mod card_list;
pub(super) mod form_panel;
pub(super) mod status_bar;
pub(super) mod util;
