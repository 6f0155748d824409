pub mod use_booking_session;
