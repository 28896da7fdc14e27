use std::ops::Deref;
#[derive(Clone, Debug)]
pub struct OperationsApiClient {
    inner: std::sync::Arc<Inner>,
}
#[derive(Debug)]
struct Inner {
    connection_provider: Box<
        dyn crate::connection::ConnectionProvider<
            crate::admin_tls_client::OperationsClientT,
        >,
    >,
    connection: ::tokio::sync::Mutex<Option<InnerConnection>>,
}
#[derive(Debug)]
struct InnerConnection {
    client: crate::admin_tls_client::OperationsClientT,
    created: std::time::SystemTime,
}
impl OperationsApiClient {
    pub fn build<
        P: crate::connection::ConnectionProvider<
            crate::admin_tls_client::OperationsClientT,
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
    ) -> std::result::Result<crate::admin_tls_client::OperationsClientT, tonic::Status> {
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
    pub async fn list_operations<
        T: Into<crate::protos::longrunning::ListOperationsRequest>,
    >(
        &self,
        request: T,
    ) -> Result<crate::protos::longrunning::ListOperationsResponse, tonic::Status> {
        Ok(self
            .connection()
            .await?
            .list_operations(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
    pub async fn get_operation<
        T: Into<crate::protos::longrunning::GetOperationRequest>,
    >(
        &self,
        request: T,
    ) -> Result<crate::protos::longrunning::Operation, tonic::Status> {
        Ok(self
            .connection()
            .await?
            .get_operation(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
    pub async fn delete_operation<
        T: Into<crate::protos::longrunning::DeleteOperationRequest>,
    >(
        &self,
        request: T,
    ) -> Result<(), tonic::Status> {
        Ok(self
            .connection()
            .await?
            .delete_operation(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
    pub async fn cancel_operation<
        T: Into<crate::protos::longrunning::CancelOperationRequest>,
    >(
        &self,
        request: T,
    ) -> Result<(), tonic::Status> {
        Ok(self
            .connection()
            .await?
            .cancel_operation(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
    pub async fn wait_operation<
        T: Into<crate::protos::longrunning::WaitOperationRequest>,
    >(
        &self,
        request: T,
    ) -> Result<crate::protos::longrunning::Operation, tonic::Status> {
        Ok(self
            .connection()
            .await?
            .wait_operation(tonic::Request::new(request.into()))
            .await?
            .into_inner())
    }
}
