//! The compiled-in table of documented modules.
//!
//! Every page the generator can produce is listed here, in the order pages
//! are generated and reported. The `id` doubles as the folder name under the
//! docs root and the directory name under the output root:
//!
//! ```text
//! docs/bpi-core/README.md   →   website/docs/bpi-core/index.html
//! ```
//!
//! Adding a module means adding a row. Nothing is discovered at runtime.

use serde::Serialize;

/// Display metadata for one documentation module.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModuleDescriptor {
    /// Folder name, also used as the output directory name.
    pub id: &'static str,
    pub title: &'static str,
    /// One-sentence summary shown under the title in the hero banner.
    pub description: &'static str,
    /// Icon class suffix, rendered as `<i class="fas {icon}">`.
    pub icon: &'static str,
    /// Grouping label shown as a badge.
    pub category: &'static str,
}

pub const MODULES: &[ModuleDescriptor] = &[
    ModuleDescriptor {
        id: "bpi-core",
        title: "BPI Core",
        description: "Core node runtime: consensus, ledger, audit trail and the command-line interface.",
        icon: "fa-cube",
        category: "Core Infrastructure",
    },
    ModuleDescriptor {
        id: "bpci-enterprise",
        title: "BPCI Enterprise",
        description: "Enterprise server with autonomous economy, governance, registry and mining integration.",
        icon: "fa-building",
        category: "Enterprise",
    },
    ModuleDescriptor {
        id: "bpi-immutable-os",
        title: "BPI Immutable OS",
        description: "Hardened, immutable operating system image for running BPI nodes.",
        icon: "fa-shield-alt",
        category: "Security",
    },
    ModuleDescriptor {
        id: "pravyom-wallet",
        title: "Pravyom Wallet",
        description: "Wallet core for key management, signing and balance tracking.",
        icon: "fa-wallet",
        category: "Wallets & Identity",
    },
    ModuleDescriptor {
        id: "wallet-identity",
        title: "Wallet Identity",
        description: "Identity layer binding wallets to verifiable identities and transports.",
        icon: "fa-id-card",
        category: "Wallets & Identity",
    },
    ModuleDescriptor {
        id: "installer",
        title: "Installers",
        description: "Installers for the metanode, BPI node and agreement compiler toolchains.",
        icon: "fa-download",
        category: "Tooling",
    },
    ModuleDescriptor {
        id: "capability-tests",
        title: "Capability Tests",
        description: "Capability test suite exercising the platform end to end.",
        icon: "fa-vial",
        category: "Testing",
    },
    ModuleDescriptor {
        id: "comprehensive-350-tests",
        title: "Comprehensive Test Suite",
        description: "The 350-case comprehensive regression suite.",
        icon: "fa-clipboard-check",
        category: "Testing",
    },
];

/// Look up a module by id.
pub fn find(id: &str) -> Option<&'static ModuleDescriptor> {
    MODULES.iter().find(|m| m.id == id)
}
