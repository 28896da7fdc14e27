impl<T: Into<::prost::alloc::string::String>> From<T>
for crate::protos::firestore_admin::DeleteIndexRequest {
    fn from(t: T) -> Self {
        Self { name: t.into() }
    }
}
impl<T: Into<::prost::alloc::string::String>> From<T>
for crate::protos::firestore_admin::GetFieldRequest {
    fn from(t: T) -> Self {
        Self { name: t.into() }
    }
}
impl<T: Into<::prost::alloc::string::String>> From<T>
for crate::protos::firestore_admin::GetIndexRequest {
    fn from(t: T) -> Self {
        Self { name: t.into() }
    }
}
impl<T: Into<::prost::alloc::string::String>> From<T>
for crate::protos::longrunning::CancelOperationRequest {
    fn from(t: T) -> Self {
        Self { name: t.into() }
    }
}
impl<T: Into<::prost::alloc::string::String>> From<T>
for crate::protos::longrunning::DeleteOperationRequest {
    fn from(t: T) -> Self {
        Self { name: t.into() }
    }
}
impl<T: Into<::prost::alloc::string::String>> From<T>
for crate::protos::longrunning::GetOperationRequest {
    fn from(t: T) -> Self {
        Self { name: t.into() }
    }
}
