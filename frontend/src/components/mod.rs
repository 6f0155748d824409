pub mod booking_list;
pub mod booking_modal;
pub mod calendar;
pub mod forms;
pub mod header;
