use std::ops::Deref;
#[derive(Clone, Debug)]
pub struct FirestoreAdminApiClient {
    inner: std::sync::Arc<Inner>,
}
#[derive(Debug)]
struct Inner {
    connection_provider: Box<
        dyn crate::connection::ConnectionProvider<
            crate::admin_tls_client::FirestoreAdminClientT,
        >,
    >,
    connection: ::tokio::sync::Mutex<Option<InnerConnection>>,
}
#[derive(Debug)]
struct InnerConnection {
    client: crate::admin_tls_client::FirestoreAdminClientT,
    created: std::time::SystemTime,
}
impl FirestoreAdminApiClient {
    pub fn build<
        P: crate::connection::ConnectionProvider<
            crate::admin_tls_client::FirestoreAdminClientT,
        >,
    >(connection_provider: P) -> Self {
        let inner = Inner {
            connection_provider: Box::new(connection_provider),
            connection: tokio::sync::Mutex::new(None),
        };
        Self {
            inner: std::sync::Arc::new(inner),
        }
    }
    pub async fn connection(
        &self,
    ) -> std::result::Result<crate::admin_tls_client::FirestoreAdminClientT, tonic::Status> {
        let mut guard = self.inner.connection.lock().await;
        if let Some(connection) = guard.deref() {
            if self
                .inner
                .connection_provider
                .connection_is_stale(connection.created)
                .await
            {
                guard.take();
            }
        }
        match guard.deref() {
            Some(connection) => Ok(connection.client.clone()),
            None => {
                let client = self.inner.connection_provider.provide_connection().await?;
                guard.replace(InnerConnection {
                    client: client.clone(),
                    created: std::time::SystemTime::now(),
                });
                Ok(client)
            }
        }
    }
    pub fn url(&self) -> &str {
        self.inner.connection_provider.connection_url()
    }
    pub async fn create_index<
        T: Into<crate::protos::firestore_admin::CreateIndexRequest>,
    >(
        &self,
        request: T,
    ) -> Result<crate::protos::longrunning::Operation, tonic::Status> {
        Ok(self
            .connection()
            .await?
            .create_index(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
    pub async fn list_indexes<
        T: Into<crate::protos::firestore_admin::ListIndexesRequest>,
    >(
        &self,
        request: T,
    ) -> Result<crate::protos::firestore_admin::ListIndexesResponse, tonic::Status> {
        Ok(self
            .connection()
            .await?
            .list_indexes(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
    pub async fn get_index<
        T: Into<crate::protos::firestore_admin::GetIndexRequest>,
    >(
        &self,
        request: T,
    ) -> Result<crate::protos::firestore_admin::Index, tonic::Status> {
        Ok(self
            .connection()
            .await?
            .get_index(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
    pub async fn delete_index<
        T: Into<crate::protos::firestore_admin::DeleteIndexRequest>,
    >(
        &self,
        request: T,
    ) -> Result<(), tonic::Status> {
        Ok(self
            .connection()
            .await?
            .delete_index(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
    pub async fn get_field<
        T: Into<crate::protos::firestore_admin::GetFieldRequest>,
    >(
        &self,
        request: T,
    ) -> Result<crate::protos::firestore_admin::Field, tonic::Status> {
        Ok(self
            .connection()
            .await?
            .get_field(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
    pub async fn update_field<
        T: Into<crate::protos::firestore_admin::UpdateFieldRequest>,
    >(
        &self,
        request: T,
    ) -> Result<crate::protos::longrunning::Operation, tonic::Status> {
        Ok(self
            .connection()
            .await?
            .update_field(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
    pub async fn list_fields<
        T: Into<crate::protos::firestore_admin::ListFieldsRequest>,
    >(
        &self,
        request: T,
    ) -> Result<crate::protos::firestore_admin::ListFieldsResponse, tonic::Status> {
        Ok(self
            .connection()
            .await?
            .list_fields(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
    pub async fn export_documents<
        T: Into<crate::protos::firestore_admin::ExportDocumentsRequest>,
    >(
        &self,
        request: T,
    ) -> Result<crate::protos::longrunning::Operation, tonic::Status> {
        Ok(self
            .connection()
            .await?
            .export_documents(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
    pub async fn import_documents<
        T: Into<crate::protos::firestore_admin::ImportDocumentsRequest>,
    >(
        &self,
        request: T,
    ) -> Result<crate::protos::longrunning::Operation, tonic::Status> {
        Ok(self
            .connection()
            .await?
            .import_documents(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
}
