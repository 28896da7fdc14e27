/*
 * SPDX-FileCopyrightText: Copyright (c) 2026 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use prost::Message;
use tokio_stream::StreamExt;
use tonic::transport::Endpoint;
use tonic::{Request, Response, Status};

use crate::admin_tls_client::{AdminClientConfig, ApiConfig, FirestoreAdminClientT};
use crate::auth::{AuthInterceptor, StaticTokenSource};
use crate::connection::ConnectionProvider;
use crate::firestore_admin_client::FirestoreAdminApi;
use crate::protos::firestore_admin::firestore_admin_client::FirestoreAdminClient;
use crate::protos::firestore_admin::firestore_admin_server::{
    FirestoreAdmin, FirestoreAdminServer,
};
use crate::protos::firestore_admin::{
    CreateIndexRequest, DeleteIndexRequest, ExportDocumentsRequest, Field, GetFieldRequest,
    GetIndexRequest, ImportDocumentsRequest, Index, IndexOperationMetadata, ListFieldsRequest,
    ListFieldsResponse, ListIndexesRequest, ListIndexesResponse, UpdateFieldRequest, index,
};
use crate::protos::longrunning::operations_server::{Operations, OperationsServer};
use crate::protos::longrunning::{
    CancelOperationRequest, DeleteOperationRequest, GetOperationRequest, ListOperationsRequest,
    ListOperationsResponse, Operation, WaitOperationRequest, operation,
};
use crate::protos::firestore_admin_api_client::FirestoreAdminApiClient;

#[derive(Clone, Default)]
struct MockAdmin {
    state: Arc<MockState>,
}

#[derive(Default)]
struct MockState {
    deleted_indexes: Mutex<Vec<String>>,
    cancelled_operations: Mutex<Vec<String>>,
    last_authorization: Mutex<Option<String>>,
}

impl MockAdmin {
    fn record_authorization<T>(&self, request: &Request<T>) {
        let authorization = request
            .metadata()
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        *self.state.last_authorization.lock().unwrap() = authorization;
    }

    fn operation_for(&self, resource: &str) -> Operation {
        let metadata = IndexOperationMetadata {
            index: resource.to_string(),
            ..Default::default()
        };
        Operation {
            name: format!("{resource}/operations/op-1"),
            metadata: Some(prost_types::Any {
                type_url:
                    "type.googleapis.com/google.firestore.admin.v1.IndexOperationMetadata"
                        .to_string(),
                value: metadata.encode_to_vec(),
            }),
            done: false,
            result: None,
        }
    }
}

#[tonic::async_trait]
impl FirestoreAdmin for MockAdmin {
    async fn create_index(
        &self,
        request: Request<CreateIndexRequest>,
    ) -> Result<Response<Operation>, Status> {
        self.record_authorization(&request);
        let parent = request.into_inner().parent;
        Ok(Response::new(self.operation_for(&parent)))
    }

    async fn list_indexes(
        &self,
        request: Request<ListIndexesRequest>,
    ) -> Result<Response<ListIndexesResponse>, Status> {
        self.record_authorization(&request);
        let parent = request.into_inner().parent;
        Ok(Response::new(ListIndexesResponse {
            indexes: vec![
                Index {
                    name: format!("{parent}/indexes/idx-1"),
                    state: index::State::Ready as i32,
                    ..Default::default()
                },
                Index {
                    name: format!("{parent}/indexes/idx-2"),
                    state: index::State::Creating as i32,
                    ..Default::default()
                },
            ],
            next_page_token: String::new(),
        }))
    }

    async fn get_index(
        &self,
        request: Request<GetIndexRequest>,
    ) -> Result<Response<Index>, Status> {
        self.record_authorization(&request);
        let name = request.into_inner().name;
        Ok(Response::new(Index {
            name,
            state: index::State::Ready as i32,
            ..Default::default()
        }))
    }

    async fn delete_index(
        &self,
        request: Request<DeleteIndexRequest>,
    ) -> Result<Response<()>, Status> {
        self.record_authorization(&request);
        let name = request.into_inner().name;
        self.state.deleted_indexes.lock().unwrap().push(name);
        Ok(Response::new(()))
    }

    async fn get_field(
        &self,
        request: Request<GetFieldRequest>,
    ) -> Result<Response<Field>, Status> {
        self.record_authorization(&request);
        let name = request.into_inner().name;
        Ok(Response::new(Field {
            name,
            index_config: None,
        }))
    }

    async fn update_field(
        &self,
        request: Request<UpdateFieldRequest>,
    ) -> Result<Response<Operation>, Status> {
        self.record_authorization(&request);
        let field = request
            .into_inner()
            .field
            .ok_or_else(|| Status::invalid_argument("field is required"))?;
        Ok(Response::new(self.operation_for(&field.name)))
    }

    async fn list_fields(
        &self,
        request: Request<ListFieldsRequest>,
    ) -> Result<Response<ListFieldsResponse>, Status> {
        self.record_authorization(&request);
        let parent = request.into_inner().parent;
        Ok(Response::new(ListFieldsResponse {
            fields: vec![Field {
                name: format!("{parent}/fields/updated_at"),
                index_config: None,
            }],
            next_page_token: String::new(),
        }))
    }

    async fn export_documents(
        &self,
        request: Request<ExportDocumentsRequest>,
    ) -> Result<Response<Operation>, Status> {
        self.record_authorization(&request);
        let name = request.into_inner().name;
        Ok(Response::new(self.operation_for(&name)))
    }

    async fn import_documents(
        &self,
        request: Request<ImportDocumentsRequest>,
    ) -> Result<Response<Operation>, Status> {
        self.record_authorization(&request);
        let name = request.into_inner().name;
        Ok(Response::new(self.operation_for(&name)))
    }
}

#[tonic::async_trait]
impl Operations for MockAdmin {
    async fn list_operations(
        &self,
        request: Request<ListOperationsRequest>,
    ) -> Result<Response<ListOperationsResponse>, Status> {
        let name = request.into_inner().name;
        Ok(Response::new(ListOperationsResponse {
            operations: vec![Operation {
                name: format!("{name}/operations/op-1"),
                done: false,
                ..Default::default()
            }],
            next_page_token: String::new(),
        }))
    }

    async fn get_operation(
        &self,
        request: Request<GetOperationRequest>,
    ) -> Result<Response<Operation>, Status> {
        let name = request.into_inner().name;
        Ok(Response::new(Operation {
            name,
            done: true,
            result: Some(operation::Result::Response(prost_types::Any::default())),
            ..Default::default()
        }))
    }

    async fn delete_operation(
        &self,
        request: Request<DeleteOperationRequest>,
    ) -> Result<Response<()>, Status> {
        let name = request.into_inner().name;
        self.state.cancelled_operations.lock().unwrap().push(name);
        Ok(Response::new(()))
    }

    async fn cancel_operation(
        &self,
        request: Request<CancelOperationRequest>,
    ) -> Result<Response<()>, Status> {
        let name = request.into_inner().name;
        self.state.cancelled_operations.lock().unwrap().push(name);
        Ok(Response::new(()))
    }

    async fn wait_operation(
        &self,
        request: Request<WaitOperationRequest>,
    ) -> Result<Response<Operation>, Status> {
        let name = request.into_inner().name;
        Ok(Response::new(Operation {
            name,
            done: true,
            ..Default::default()
        }))
    }
}

/// Serve both services on a loopback port, counting accepted TCP
/// connections so tests can pin channel reuse.
async fn spawn_server(mock: MockAdmin) -> (SocketAddr, Arc<AtomicUsize>) {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let connections = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&connections);
    let incoming = tokio_stream::wrappers::TcpListenerStream::new(listener).map(move |stream| {
        if stream.is_ok() {
            counter.fetch_add(1, Ordering::SeqCst);
        }
        stream
    });
    tokio::spawn(async move {
        tonic::transport::Server::builder()
            .add_service(FirestoreAdminServer::new(mock.clone()))
            .add_service(OperationsServer::new(mock))
            .serve_with_incoming(incoming)
            .await
            .unwrap();
    });
    (addr, connections)
}

/// Hands out clients over a lazily connected loopback channel, counting how
/// often the wrapper actually asks for one.
#[derive(Clone, Debug)]
struct CountingProvider {
    url: String,
    provided: Arc<AtomicUsize>,
    stale: Arc<AtomicBool>,
}

impl CountingProvider {
    fn new(addr: SocketAddr) -> Self {
        Self {
            url: format!("http://{addr}"),
            provided: Arc::new(AtomicUsize::new(0)),
            stale: Arc::new(AtomicBool::new(false)),
        }
    }
}

#[async_trait::async_trait]
impl ConnectionProvider<FirestoreAdminClientT> for CountingProvider {
    async fn provide_connection(&self) -> Result<FirestoreAdminClientT, Status> {
        self.provided.fetch_add(1, Ordering::SeqCst);
        let channel = Endpoint::from_shared(self.url.clone())
            .map_err(|e| Status::unavailable(e.to_string()))?
            .connect_lazy();
        Ok(FirestoreAdminClient::with_interceptor(
            channel,
            AuthInterceptor::none(),
        ))
    }

    async fn connection_is_stale(&self, _last_connected: std::time::SystemTime) -> bool {
        self.stale.swap(false, Ordering::SeqCst)
    }

    fn connection_url(&self) -> &str {
        &self.url
    }
}

#[tokio::test]
async fn wrapper_builds_its_connection_lazily_and_caches_it() {
    let (addr, _) = spawn_server(MockAdmin::default()).await;
    let provider = CountingProvider::new(addr);
    let client = FirestoreAdminApiClient::build(provider.clone());

    // Construction alone performs no connection work.
    assert_eq!(provider.provided.load(Ordering::SeqCst), 0);

    client
        .get_index("projects/p/databases/d/collectionGroups/c/indexes/i")
        .await
        .unwrap();
    client
        .list_indexes(ListIndexesRequest {
            parent: "projects/p/databases/d/collectionGroups/c".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();

    assert_eq!(provider.provided.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn stale_connections_are_rebuilt_on_the_next_call() {
    let (addr, _) = spawn_server(MockAdmin::default()).await;
    let provider = CountingProvider::new(addr);
    let client = FirestoreAdminApiClient::build(provider.clone());

    client
        .get_index("projects/p/databases/d/collectionGroups/c/indexes/i")
        .await
        .unwrap();
    provider.stale.store(true, Ordering::SeqCst);
    client
        .get_index("projects/p/databases/d/collectionGroups/c/indexes/i")
        .await
        .unwrap();

    assert_eq!(provider.provided.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn admin_and_operations_clients_share_one_channel() {
    let mock = MockAdmin::default();
    let (addr, connections) = spawn_server(mock).await;

    let url = format!("http://{addr}");
    let client_config = AdminClientConfig::new(None, None);
    let api = ApiConfig::new(&url, &client_config);
    let api_clients = FirestoreAdminApi::new(&api);

    let operation = api_clients
        .admin
        .create_index(CreateIndexRequest {
            parent: "projects/p/databases/d/collectionGroups/posts".to_string(),
            index: Some(Index::default()),
        })
        .await
        .unwrap();
    assert!(!operation.done);

    let polled = api_clients
        .operations
        .get_operation(operation.name.clone())
        .await
        .unwrap();
    assert!(polled.done);
    assert_eq!(polled.name, operation.name);

    assert_eq!(connections.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn bearer_tokens_reach_the_server() {
    let mock = MockAdmin::default();
    let state = Arc::clone(&mock.state);
    let (addr, _) = spawn_server(mock).await;

    let url = format!("http://{addr}");
    let client_config = AdminClientConfig::new(None, None)
        .with_token_source(Arc::new(StaticTokenSource::new("token-123")));
    let api = ApiConfig::new(&url, &client_config);
    let api_clients = FirestoreAdminApi::new(&api);

    api_clients
        .admin
        .get_index("projects/p/databases/d/collectionGroups/c/indexes/i")
        .await
        .unwrap();

    assert_eq!(
        state.last_authorization.lock().unwrap().as_deref(),
        Some("Bearer token-123")
    );
}

#[tokio::test]
async fn external_channels_carry_no_credentials() {
    let mock = MockAdmin::default();
    let state = Arc::clone(&mock.state);
    let (addr, connections) = spawn_server(mock).await;

    let url = format!("http://{addr}");
    let channel = Endpoint::from_shared(url.clone())
        .unwrap()
        .connect()
        .await
        .unwrap();
    let api_clients = FirestoreAdminApi::with_channel(url, channel);

    api_clients
        .admin
        .get_index("projects/p/databases/d/collectionGroups/c/indexes/i")
        .await
        .unwrap();

    assert!(state.last_authorization.lock().unwrap().is_none());
    assert_eq!(connections.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn the_full_admin_surface_round_trips() {
    let mock = MockAdmin::default();
    let state = Arc::clone(&mock.state);
    let (addr, _) = spawn_server(mock).await;

    let url = format!("http://{addr}");
    let client_config = AdminClientConfig::new(None, None);
    let api = ApiConfig::new(&url, &client_config);
    let api_clients = FirestoreAdminApi::new(&api);
    let admin = &api_clients.admin;
    let operations = &api_clients.operations;

    let parent = "projects/p/databases/d/collectionGroups/posts";
    let database = "projects/p/databases/d";

    let created = admin
        .create_index(CreateIndexRequest {
            parent: parent.to_string(),
            index: Some(Index {
                fields: vec![index::IndexField {
                    field_path: "author".to_string(),
                    value_mode: Some(index::index_field::ValueMode::Order(
                        index::index_field::Order::Ascending as i32,
                    )),
                }],
                query_scope: index::QueryScope::Collection as i32,
                ..Default::default()
            }),
        })
        .await
        .unwrap();
    assert_eq!(created.name, format!("{parent}/operations/op-1"));

    let listed = admin
        .list_indexes(ListIndexesRequest {
            parent: parent.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(listed.indexes.len(), 2);
    assert_eq!(
        index::State::try_from(listed.indexes[0].state).unwrap(),
        index::State::Ready
    );

    let fetched = admin.get_index(format!("{parent}/indexes/idx-1")).await.unwrap();
    assert_eq!(fetched.name, format!("{parent}/indexes/idx-1"));

    admin
        .delete_index(format!("{parent}/indexes/idx-1"))
        .await
        .unwrap();
    assert_eq!(
        *state.deleted_indexes.lock().unwrap(),
        vec![format!("{parent}/indexes/idx-1")]
    );

    let field = admin.get_field(format!("{parent}/fields/author")).await.unwrap();
    assert_eq!(field.name, format!("{parent}/fields/author"));

    let field_op = admin
        .update_field(UpdateFieldRequest {
            field: Some(Field {
                name: format!("{parent}/fields/author"),
                index_config: None,
            }),
            update_mask: Some(prost_types::FieldMask {
                paths: vec!["index_config".to_string()],
            }),
        })
        .await
        .unwrap();
    assert!(!field_op.done);

    let fields = admin
        .list_fields(ListFieldsRequest {
            parent: parent.to_string(),
            filter: "indexConfig.usesAncestorConfig:false".to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(fields.fields.len(), 1);

    let export = admin
        .export_documents(ExportDocumentsRequest {
            name: database.to_string(),
            collection_ids: vec!["posts".to_string()],
            output_uri_prefix: "gs://bucket/backup".to_string(),
        })
        .await
        .unwrap();
    assert_eq!(export.name, format!("{database}/operations/op-1"));

    let import = admin
        .import_documents(ImportDocumentsRequest {
            name: database.to_string(),
            collection_ids: vec![],
            input_uri_prefix: "gs://bucket/backup".to_string(),
        })
        .await
        .unwrap();
    assert!(!import.done);

    let ops = operations
        .list_operations(ListOperationsRequest {
            name: database.to_string(),
            ..Default::default()
        })
        .await
        .unwrap();
    assert_eq!(ops.operations.len(), 1);

    let waited = operations
        .wait_operation(WaitOperationRequest {
            name: created.name.clone(),
            timeout: None,
        })
        .await
        .unwrap();
    assert!(waited.done);

    operations
        .cancel_operation(created.name.clone())
        .await
        .unwrap();
    operations
        .delete_operation(created.name.clone())
        .await
        .unwrap();
    assert_eq!(
        *state.cancelled_operations.lock().unwrap(),
        vec![created.name.clone(), created.name.clone()]
    );
}
