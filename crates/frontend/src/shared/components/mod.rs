pub mod entity_form;
pub mod entity_list;
pub mod form_field;
pub mod page_header;
pub mod pagination_controls;
pub mod stat_card;
