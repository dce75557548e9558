pub mod badge;

pub use badge::{
    Badge, BadgeElement, BadgeSlotOverrides, BadgeSlotProps, BadgeSlots, SlotComponent,
    SlotRenderProps,
};
