//! Versioned selectors. Each holds one bound implementation per API version of its resource;
//! accessors are plain lookups. Most selectors expose `ResourceApi`; owned collections expose
//! `CollectionApi`.

use super::backend::Backend;
use crate::resources::{
    AdminActions, BanFileMonitors, ChatMessages, GameServers, Maps, Players, PlayersV1_1,
    ProtectedNames, Reports, Tags, UserProfiles,
};
use resource_framework::{ApiVersion, CollectionApi, ResourceApi};
use std::sync::Arc;

/// Generates `<Name>Selector` with a field and accessor per version, e.g. `v1()` and `v1_1()`.
macro_rules! resource_selector {
    ($name:ident { $($version:ident => $resource:ty),+ $(,)? }) => {
        resource_selector!($name: ResourceApi via bind { $($version => $resource),+ });
    };
    ($name:ident: $api:ident via $bind:ident { $($version:ident => $resource:ty),+ $(,)? }) => {
        paste::paste! {
            #[doc = concat!("Versioned access to `", stringify!($name), "`.")]
            #[derive(Clone)]
            pub struct [<$name Selector>] {
                $([<$version:lower>]: Arc<dyn $api<$resource>>,)+
            }

            impl [<$name Selector>] {
                /// Wraps already bound implementations, one per version.
                pub fn new($([<$version:lower>]: Arc<dyn $api<$resource>>),+) -> Self {
                    Self { $([<$version:lower>],)+ }
                }

                pub fn bind<B: Backend>(backend: &B) -> Self {
                    Self {
                        $([<$version:lower>]: backend.$bind::<$resource>(ApiVersion::$version),)+
                    }
                }

                $(
                    pub fn [<$version:lower>](&self) -> &dyn $api<$resource> {
                        self.[<$version:lower>].as_ref()
                    }
                )+
            }
        }
    };
}

resource_selector!(Players { V1 => Players, V1_1 => PlayersV1_1 });
resource_selector!(AdminActions { V1 => AdminActions });
resource_selector!(GameServers { V1 => GameServers });
resource_selector!(BanFileMonitors { V1 => BanFileMonitors });
resource_selector!(Reports { V1 => Reports });
resource_selector!(Tags { V1 => Tags });
resource_selector!(Maps { V1 => Maps });
resource_selector!(MapFiles: CollectionApi via bind_collection { V1 => Maps });
resource_selector!(ProtectedNames { V1 => ProtectedNames });
resource_selector!(UserProfiles { V1 => UserProfiles });
resource_selector!(ChatMessages { V1 => ChatMessages });
