pub mod patron_status_cmd;
