mod filesystem;

pub use filesystem::FilesystemBlobStore;
