//! Loose object database (`.git/objects`)
//!
//! Every object is stored as the zlib-compressed envelope under
//! `objects/<first-2-hex>/<remaining-38-hex>`. Writes go to a temporary file
//! in the fan-out directory first and are renamed into place, so readers never
//! observe a partially written object.

use crate::artifacts::objects::object::{Object, ObjectBox};
use crate::artifacts::objects::object_id::ObjectId;
use crate::errors::{Error, Result};
use bytes::Bytes;
use fake::rand;
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug)]
pub struct Database {
    path: Box<Path>,
}

impl Database {
    pub fn new(path: Box<Path>) -> Self {
        Database { path }
    }

    pub fn objects_path(&self) -> &Path {
        &self.path
    }

    /// Content-hash key of an envelope
    pub fn hash(envelope: &[u8]) -> ObjectId {
        ObjectId::hash(envelope)
    }

    /// Compute the key of `object` and, if `persist` is set, store it
    ///
    /// The key is returned either way, so callers can hash without writing.
    pub fn write(&self, object: &impl Object, persist: bool) -> Result<ObjectId> {
        let envelope = object.envelope();
        let object_id = Self::hash(&envelope);

        if persist {
            self.store(&object_id, envelope)?;
        }

        Ok(object_id)
    }

    /// Read and decode the object stored under `object_id`
    pub fn read(&self, object_id: &ObjectId) -> Result<ObjectBox> {
        let envelope = self.load(object_id)?;

        ObjectBox::from_envelope(envelope).map_err(|e| match e {
            Error::MalformedObject { reason, .. } => Error::malformed(object_id.to_string(), reason),
            other => other,
        })
    }

    /// Whether `object_id` is stored, without decompressing it
    pub fn exists(&self, object_id: &ObjectId) -> bool {
        self.object_path(object_id).is_file()
    }

    pub fn object_path(&self, object_id: &ObjectId) -> PathBuf {
        self.path.join(object_id.to_path())
    }

    /// Raw (decompressed) envelope of a stored object
    pub fn load(&self, object_id: &ObjectId) -> Result<Bytes> {
        let object_path = self.object_path(object_id);

        let compressed = match std::fs::read(&object_path) {
            Ok(compressed) => compressed,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(Error::ObjectNotFound(object_id.to_string()));
            }
            Err(e) => return Err(Error::io(object_path, e)),
        };

        debug!(oid = %object_id, bytes = compressed.len(), "read object");

        Self::decompress(&compressed)
            .map_err(|reason| Error::malformed(object_id.to_string(), reason))
    }

    fn store(&self, object_id: &ObjectId, envelope: Bytes) -> Result<()> {
        let object_path = self.object_path(object_id);

        // content addressing: an existing file already holds these bytes
        if object_path.exists() {
            debug!(oid = %object_id, "object already stored");
            return Ok(());
        }

        let object_dir = object_path
            .parent()
            .ok_or_else(|| Error::NotADirectory(object_path.clone()))?;
        std::fs::create_dir_all(object_dir).map_err(|e| Error::io(object_dir, e))?;

        self.write_object(object_dir, &object_path, envelope)?;
        debug!(oid = %object_id, "wrote object");

        Ok(())
    }

    fn write_object(&self, object_dir: &Path, object_path: &Path, envelope: Bytes) -> Result<()> {
        let temp_object_path = object_dir.join(Self::generate_temp_name());

        let object_content =
            Self::compress(&envelope).map_err(|e| Error::io(&temp_object_path, e))?;

        let mut file = std::fs::OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&temp_object_path)
            .map_err(|e| Error::io(&temp_object_path, e))?;

        if let Err(e) = file.write_all(&object_content).and_then(|_| file.sync_all()) {
            let _ = std::fs::remove_file(&temp_object_path);
            return Err(Error::io(&temp_object_path, e));
        }
        drop(file);

        // rename the temp file to the object file to make it atomic
        std::fs::rename(&temp_object_path, object_path).map_err(|e| {
            let _ = std::fs::remove_file(&temp_object_path);
            Error::io(object_path, e)
        })
    }

    fn compress(data: &[u8]) -> std::io::Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::default());
        encoder.write_all(data)?;

        encoder.finish()
    }

    fn decompress(data: &[u8]) -> std::result::Result<Bytes, String> {
        let mut decoder = flate2::read::ZlibDecoder::new(data);
        let mut decompressed_content = Vec::new();
        decoder
            .read_to_end(&mut decompressed_content)
            .map_err(|e| format!("unable to decompress object content: {e}"))?;

        Ok(decompressed_content.into())
    }

    fn generate_temp_name() -> String {
        format!("tmp-obj-{}", rand::random::<u32>())
    }
}
