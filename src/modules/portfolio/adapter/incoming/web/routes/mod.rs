pub mod delete_record;
pub mod get_records;
pub mod get_single;
pub mod payloads;
pub mod save_record;
pub mod save_single;

pub use delete_record::delete_record_handler;
pub use get_records::get_records_handler;
pub use get_single::get_single_handler;
pub use payloads::ImagePayload;
pub use save_record::{save_record_handler, SaveRecordRequest};
pub use save_single::{save_single_handler, SaveSingleRequest};
