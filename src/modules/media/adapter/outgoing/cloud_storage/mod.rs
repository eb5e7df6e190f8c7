pub mod blob_store_gcs;
