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

#[allow(non_snake_case, unknown_lints, clippy::all)]
#[rustfmt::skip]
pub mod status;

#[allow(non_snake_case, unknown_lints, clippy::all)]
#[rustfmt::skip]
pub mod longrunning;

#[allow(non_snake_case, unknown_lints, clippy::all)]
#[rustfmt::skip]
pub mod firestore_admin;

#[allow(clippy::all)]
#[rustfmt::skip]
pub mod firestore_admin_api_client;

#[allow(clippy::all)]
#[rustfmt::skip]
pub mod operations_api_client;

#[allow(clippy::all)]
#[rustfmt::skip]
pub mod convenience_converters;
