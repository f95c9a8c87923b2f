pub mod attendee;
