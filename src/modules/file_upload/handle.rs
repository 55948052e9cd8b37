use actix_multipart::Multipart;
use actix_web::{post, web};
use futures_util::TryStreamExt;

use crate::api::success::Success;
use crate::api::{error, success};
use crate::modules::file_upload::{
    model::NewFile, schema::FileEntity, service::FileUploadService,
};

struct FilePart {
    filename: String,
    mime_type: String,
    bytes: Vec<u8>,
}

/// Reads the file part named `field_name`; other parts are skipped.
async fn read_file_field(
    mut payload: Multipart,
    field_name: &str,
    max_file_size: usize,
) -> Result<Option<FilePart>, error::Error> {
    while let Some(mut field) =
        payload.try_next().await.map_err(|e| error::Error::bad_request(e.to_string()))?
    {
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(|name| name.to_string());

        let filename = match filename {
            Some(filename) if field.name() == Some(field_name) => filename,
            _ => {
                while field
                    .try_next()
                    .await
                    .map_err(|e| error::Error::bad_request(e.to_string()))?
                    .is_some()
                {}
                continue;
            }
        };

        // Detect MIME type, guessing from the filename when the client sent none
        let mime_type = field
            .content_type()
            .filter(|m| **m != mime_guess::mime::APPLICATION_OCTET_STREAM)
            .map(|m| m.essence_str().to_string())
            .unwrap_or_else(|| {
                mime_guess::from_path(&filename).first_or_octet_stream().essence_str().to_string()
            });

        let mut bytes = Vec::new();
        while let Some(chunk) =
            field.try_next().await.map_err(|e| error::Error::bad_request(e.to_string()))?
        {
            bytes.extend_from_slice(&chunk);
            if bytes.len() > max_file_size {
                return Err(error::Error::bad_request(format!(
                    "File size exceeds maximum allowed size of {} bytes",
                    max_file_size
                )));
            }
        }

        return Ok(Some(FilePart { filename, mime_type, bytes }));
    }

    Ok(None)
}

fn upload_error(err: error::SystemError) -> error::Error {
    match err {
        error::SystemError::BadRequest(msg) => error::Error::BadRequest(msg),
        other => {
            log::error!("Upload failed: {:?}", other);
            error::Error::internal(other.to_string())
        }
    }
}

/// Stores an image and records its metadata
#[post("/upload")]
pub async fn upload_image(
    service: web::Data<FileUploadService>,
    payload: Multipart,
) -> Result<success::Success<FileEntity>, error::Error> {
    let part = read_file_field(payload, "image", service.max_file_size())
        .await?
        .ok_or_else(|| error::Error::bad_request("No file uploaded"))?;

    let file =
        service.upload_file(part.filename, part.bytes, part.mime_type).await.map_err(upload_error)?;

    Ok(Success::file(file).message("File uploaded successfully"))
}

/// Stores an image without recording it
#[post("/uploadfile")]
pub async fn upload_file(
    service: web::Data<FileUploadService>,
    payload: Multipart,
) -> Result<success::Success<NewFile>, error::Error> {
    let part = read_file_field(payload, "myfile", service.max_file_size())
        .await?
        .ok_or_else(|| error::Error::bad_request("No file uploaded"))?;

    let file =
        service.store_file(part.filename, part.bytes, part.mime_type).await.map_err(upload_error)?;

    Ok(Success::file(file).message("File uploaded successfully"))
}
