pub mod p900_business_directory;
