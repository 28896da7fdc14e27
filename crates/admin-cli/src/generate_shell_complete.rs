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

use clap::{CommandFactory, Parser};
use clap_complete::Shell;

#[derive(Parser)]
pub struct GenerateShellComplete {
    #[clap(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

pub fn generate(shell: Shell) {
    let mut cmd = crate::Options::command();
    clap_complete::generate(shell, &mut cmd, "firestore-admin-cli", &mut std::io::stdout());
}
