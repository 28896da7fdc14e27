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

pub(crate) mod args;

use rpc::admin_cli::CliResult;
use rpc::protos::longrunning::{ListOperationsRequest, WaitOperationRequest};

use crate::cfg::dispatch::Dispatch;
use crate::cfg::runtime::RuntimeContext;
use crate::output;

impl Dispatch for args::Cmd {
    async fn dispatch(self, ctx: RuntimeContext) -> CliResult<()> {
        match self {
            args::Cmd::List(cmd) => list(cmd, ctx).await,
            args::Cmd::Show(cmd) => show(cmd, ctx).await,
            args::Cmd::Cancel(cmd) => cancel(cmd, ctx).await,
            args::Cmd::Delete(cmd) => delete(cmd, ctx).await,
            args::Cmd::Wait(cmd) => wait(cmd, ctx).await,
        }
    }
}

async fn list(cmd: args::ListOperations, ctx: RuntimeContext) -> CliResult<()> {
    let response = ctx
        .api
        .operations
        .list_operations(ListOperationsRequest {
            name: cmd.name,
            filter: cmd.filter.unwrap_or_default(),
            page_size: cmd.page_size.unwrap_or_default(),
            page_token: cmd.page_token.unwrap_or_default(),
        })
        .await?;
    output::emit_list(
        ctx.config.format,
        output::operation_table(&response.operations),
        &response,
    );
    if !response.next_page_token.is_empty() {
        println!("Next page token: {}", response.next_page_token);
    }
    Ok(())
}

async fn show(cmd: args::ShowOperation, ctx: RuntimeContext) -> CliResult<()> {
    let operation = ctx.api.operations.get_operation(cmd.name).await?;
    println!("{operation:#?}");
    Ok(())
}

async fn cancel(cmd: args::CancelOperation, ctx: RuntimeContext) -> CliResult<()> {
    ctx.api.operations.cancel_operation(cmd.name.clone()).await?;
    println!("Cancellation requested for {}", cmd.name);
    Ok(())
}

async fn delete(cmd: args::DeleteOperation, ctx: RuntimeContext) -> CliResult<()> {
    ctx.api.operations.delete_operation(cmd.name.clone()).await?;
    println!("Deleted operation {}", cmd.name);
    Ok(())
}

async fn wait(cmd: args::WaitOperation, ctx: RuntimeContext) -> CliResult<()> {
    let operation = ctx
        .api
        .operations
        .wait_operation(WaitOperationRequest {
            name: cmd.name,
            timeout: cmd.timeout_secs.map(|seconds| prost_types::Duration {
                seconds,
                nanos: 0,
            }),
        })
        .await?;
    if operation.done {
        println!("{operation:#?}");
    } else {
        println!("Timed out waiting; operation {} is still running", operation.name);
    }
    Ok(())
}
