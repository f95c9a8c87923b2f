mod attendees_test;
mod health_test;
