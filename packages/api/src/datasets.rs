//! Dataset endpoints: upload, list, detail, summary, PDF report, delete.

use reqwest::multipart::{Form, Part};
use reqwest::Method;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{Dataset, DatasetListItem, Summary};

/// The backend keeps at most this many datasets per user and evicts the
/// oldest on upload.
pub const RETAINED_DATASETS: usize = 5;

/// Client-side upload check: the name must end with the literal `.csv`.
pub fn validate_csv_filename(filename: &str) -> Result<(), ApiError> {
    if filename.ends_with(".csv") {
        Ok(())
    } else {
        Err(ApiError::InvalidFileType {
            filename: filename.to_string(),
        })
    }
}

/// Download name for a dataset's report: `plant.csv` → `plant_report.pdf`.
pub fn report_filename(dataset_name: &str) -> String {
    format!("{}_report.pdf", dataset_name.replacen(".csv", "", 1))
}

impl ApiClient {
    /// `POST /upload/` with the CSV as the multipart `file` field.
    ///
    /// Names not ending in `.csv` are rejected before any request is made.
    pub async fn upload(&self, filename: &str, contents: Vec<u8>) -> Result<Dataset, ApiError> {
        validate_csv_filename(filename)?;
        let part = Part::bytes(contents)
            .file_name(filename.to_string())
            .mime_str("text/csv")?;
        let form = Form::new().part("file", part);
        self.send_json(self.request(Method::POST, "/upload/").multipart(form))
            .await
    }

    /// `GET /datasets/`.
    pub async fn list_datasets(&self) -> Result<Vec<DatasetListItem>, ApiError> {
        self.send_json(self.request(Method::GET, "/datasets/")).await
    }

    /// `GET /datasets/{id}/`.
    pub async fn dataset(&self, id: i64) -> Result<Dataset, ApiError> {
        self.send_json(self.request(Method::GET, &format!("/datasets/{id}/")))
            .await
    }

    /// `GET /datasets/{id}/summary/`.
    pub async fn dataset_summary(&self, id: i64) -> Result<Summary, ApiError> {
        self.send_json(self.request(Method::GET, &format!("/datasets/{id}/summary/")))
            .await
    }

    /// `GET /datasets/{id}/report/`, returning the raw PDF bytes.
    pub async fn download_report(&self, id: i64) -> Result<Vec<u8>, ApiError> {
        let response = self
            .send(self.request(Method::GET, &format!("/datasets/{id}/report/")))
            .await?;
        Ok(response.bytes().await?.to_vec())
    }

    /// `DELETE /datasets/{id}/`.
    pub async fn delete_dataset(&self, id: i64) -> Result<(), ApiError> {
        self.send(self.request(Method::DELETE, &format!("/datasets/{id}/")))
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::rc::Rc;

    use httpmock::prelude::*;
    use serde_json::json;
    use store::{MemoryStore, Session};

    use super::*;

    fn signed_in(server: &MockServer) -> ApiClient {
        let store = MemoryStore::with_session(Session::new("t1", 1, "bob"));
        ApiClient::with_base_url(&server.base_url(), Rc::new(store))
    }

    fn dataset_json(id: i64, name: &str) -> serde_json::Value {
        json!({
            "id": id,
            "name": name,
            "uploaded_at": "2024-05-01T10:00:00Z",
            "file": format!("/media/datasets/{name}"),
            "equipment": [
                {"id": 1, "equipment_name": "P-101", "equipment_type": "Pump",
                 "flowrate": 120.0, "pressure": 5.0, "temperature": 110.0}
            ]
        })
    }

    #[test]
    fn test_validate_csv_filename() {
        assert!(validate_csv_filename("plant.csv").is_ok());
        assert!(validate_csv_filename("plant.CSV").is_err());
        assert!(validate_csv_filename("plant.csv.txt").is_err());
        assert!(validate_csv_filename("csv").is_err());
    }

    #[test]
    fn test_report_filename() {
        assert_eq!(report_filename("plant.csv"), "plant_report.pdf");
        assert_eq!(report_filename("a.csv.csv"), "a.csv_report.pdf");
        assert_eq!(report_filename("noext"), "noext_report.pdf");
    }

    #[tokio::test]
    async fn test_upload_rejects_non_csv_without_request() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.any_request();
                then.status(201);
            })
            .await;

        let client = signed_in(&server);
        let err = client.upload("notes.txt", b"a,b\n".to_vec()).await.unwrap_err();
        assert!(matches!(err, ApiError::InvalidFileType { .. }));
        assert_eq!(err.to_string(), "Please upload a CSV file");
        assert_eq!(mock.calls_async().await, 0);
    }

    #[tokio::test]
    async fn test_upload_sends_multipart_file() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/upload/")
                    .header("authorization", "Token t1")
                    .body_includes("name=\"file\"")
                    .body_includes("filename=\"plant.csv\"")
                    .body_includes("Equipment Name,Type");
                then.status(201).json_body(dataset_json(12, "plant.csv"));
            })
            .await;

        let client = signed_in(&server);
        let dataset = client
            .upload(
                "plant.csv",
                b"Equipment Name,Type,Flowrate,Pressure,Temperature\n".to_vec(),
            )
            .await
            .unwrap();
        assert_eq!(dataset.id, 12);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_surfaces_backend_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/upload/");
                then.status(400)
                    .json_body(json!({"error": "Missing columns: ['Pressure']"}));
            })
            .await;

        let err = signed_in(&server)
            .upload("plant.csv", b"x".to_vec())
            .await
            .unwrap_err();
        assert_eq!(err.backend_message(), Some("Missing columns: ['Pressure']"));
    }

    #[tokio::test]
    async fn test_list_detail_summary() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/datasets/");
                then.status(200).json_body(json!([
                    {"id": 2, "name": "b.csv", "uploaded_at": "2024-05-02T09:00:00Z", "equipment_count": 3},
                    {"id": 1, "name": "a.csv", "uploaded_at": "2024-05-01T09:00:00Z", "equipment_count": 1}
                ]));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/datasets/2/");
                then.status(200).json_body(dataset_json(2, "b.csv"));
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/datasets/2/summary/");
                then.status(200).json_body(json!({
                    "total_count": 3,
                    "avg_flowrate": 12.345,
                    "avg_pressure": 4.0,
                    "avg_temperature": 100.0,
                    "type_distribution": {"Pump": 2, "Valve": 1}
                }));
            })
            .await;

        let client = signed_in(&server);
        let list = client.list_datasets().await.unwrap();
        assert_eq!(list.iter().map(|d| d.id).collect::<Vec<_>>(), vec![2, 1]);

        let dataset = client.dataset(2).await.unwrap();
        assert_eq!(dataset.name, "b.csv");

        let summary = client.dataset_summary(2).await.unwrap();
        assert_eq!(summary.total_count, 3);
        assert_eq!(summary.type_distribution.len(), 2);
    }

    #[tokio::test]
    async fn test_download_report_bytes() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/datasets/5/report/");
                then.status(200)
                    .header("content-type", "application/pdf")
                    .body("%PDF-1.4 fake");
            })
            .await;

        let bytes = signed_in(&server).download_report(5).await.unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[tokio::test]
    async fn test_delete_dataset() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(DELETE).path("/datasets/5/");
                then.status(204);
            })
            .await;

        signed_in(&server).delete_dataset(5).await.unwrap();
        mock.assert_async().await;
    }
}
