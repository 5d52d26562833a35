// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// Code generated by sidekick. DO NOT EDIT.

//! Traits to mock the clients in this library.
//!
//! Application developers may need to mock the clients in this library to test
//! how their application works with different (and sometimes hard to trigger)
//! error conditions. Mocking is largely a matter of taste, and this crate does
//! not take a position on which mocking library to use. The traits in this
//! module provide a default implementation for every RPC, which panics with
//! a helpful message. Mocks only need to implement the methods used in each
//! test.

#![allow(rustdoc::broken_intra_doc_links)]

pub(crate) mod dynamic;

/// Defines the trait used to implement [super::client::BigtableInstanceAdmin].
///
/// Application developers may need to implement this trait to mock
/// `client::BigtableInstanceAdmin`. In other use-cases, application developers only
/// use `client::BigtableInstanceAdmin` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait BigtableInstanceAdmin: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::BigtableInstanceAdmin::create_instance].
    fn create_instance(
        &self,
        _req: crate::model::CreateInstanceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableInstanceAdmin::get_instance].
    fn get_instance(
        &self,
        _req: crate::model::GetInstanceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Instance>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableInstanceAdmin::list_instances].
    fn list_instances(
        &self,
        _req: crate::model::ListInstancesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListInstancesResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableInstanceAdmin::update_instance].
    fn update_instance(
        &self,
        _req: crate::model::Instance,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Instance>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableInstanceAdmin::delete_instance].
    fn delete_instance(
        &self,
        _req: crate::model::DeleteInstanceRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableInstanceAdmin::create_cluster].
    fn create_cluster(
        &self,
        _req: crate::model::CreateClusterRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableInstanceAdmin::get_cluster].
    fn get_cluster(
        &self,
        _req: crate::model::GetClusterRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Cluster>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableInstanceAdmin::list_clusters].
    fn list_clusters(
        &self,
        _req: crate::model::ListClustersRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListClustersResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableInstanceAdmin::update_cluster].
    fn update_cluster(
        &self,
        _req: crate::model::Cluster,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableInstanceAdmin::delete_cluster].
    fn delete_cluster(
        &self,
        _req: crate::model::DeleteClusterRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableInstanceAdmin::get_operation].
    fn get_operation(
        &self,
        _req: longrunning::model::GetOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<longrunning::model::Operation>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableInstanceAdmin::cancel_operation].
    fn cancel_operation(
        &self,
        _req: longrunning::model::CancelOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableInstanceAdmin::delete_operation].
    fn delete_operation(
        &self,
        _req: longrunning::model::DeleteOperationRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Returns the polling error policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_error_policy(
        &self,
        _options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_error_policy::PollingErrorPolicy> {
        std::sync::Arc::new(gax::polling_error_policy::Aip194Strict)
    }

    /// Returns the polling backoff policy.
    ///
    /// When mocking, this method is typically irrelevant. Do not try to verify
    /// it is called by your mocks.
    fn get_polling_backoff_policy(
        &self,
        _options: &gax::options::RequestOptions,
    ) -> std::sync::Arc<dyn gax::polling_backoff_policy::PollingBackoffPolicy> {
        std::sync::Arc::new(gax::exponential_backoff::ExponentialBackoff::default())
    }
}

/// Defines the trait used to implement [super::client::BigtableTableAdmin].
///
/// Application developers may need to implement this trait to mock
/// `client::BigtableTableAdmin`. In other use-cases, application developers only
/// use `client::BigtableTableAdmin` and need not be concerned with this trait or
/// its implementations.
///
/// Services gain new RPCs routinely. Consequently, this trait gains new methods
/// too. To avoid breaking applications the trait provides a default
/// implementation of each method. Most of these implementations just return an
/// error.
pub trait BigtableTableAdmin: std::fmt::Debug + Send + Sync {
    /// Implements [super::client::BigtableTableAdmin::create_table].
    fn create_table(
        &self,
        _req: crate::model::CreateTableRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Table>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableTableAdmin::list_tables].
    fn list_tables(
        &self,
        _req: crate::model::ListTablesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::ListTablesResponse>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableTableAdmin::get_table].
    fn get_table(
        &self,
        _req: crate::model::GetTableRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Table>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableTableAdmin::delete_table].
    fn delete_table(
        &self,
        _req: crate::model::DeleteTableRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableTableAdmin::modify_column_families].
    fn modify_column_families(
        &self,
        _req: crate::model::ModifyColumnFamiliesRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<crate::model::Table>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }

    /// Implements [super::client::BigtableTableAdmin::drop_row_range].
    fn drop_row_range(
        &self,
        _req: crate::model::DropRowRangeRequest,
        _options: gax::options::RequestOptions,
    ) -> impl std::future::Future<Output = crate::Result<gax::response::Response<wkt::Empty>>> + Send {
        gaxi::unimplemented::unimplemented_stub()
    }
}
