// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Menu item helper
//!
//! GTK4 menus are models: an entry names an action, and the action
//! carries the callback. This helper creates both, registers the action
//! on the application and binds the keyboard accelerator to it.

use gtk4::{gio, prelude::*, Application};

use crate::core::{accelerator::Accelerator, error::GuiError, options::MenuItemOptions};

/// Create a menu entry whose action runs `on_activate`
///
/// # Errors
///
/// Returns the accelerator parse error when `options.accelerator`
/// is not a valid shortcut, and `InvalidAccelerator` when GTK does not
/// know the key name (e.g. `Ctrl+Foo`). Nothing is registered in
/// either case.
pub fn make_menu_item<F>(
    app: &Application,
    options: &MenuItemOptions,
    on_activate: F,
) -> Result<gio::MenuItem, GuiError>
where
    F: Fn() + 'static,
{
    let accelerator = options
        .accelerator
        .as_deref()
        .map(Accelerator::parse)
        .transpose()?;

    // GTK ignores accelerators it cannot parse without reporting it
    let accel = accelerator.as_ref().map(Accelerator::to_gtk);
    if let (Some(text), Some(accel)) = (options.accelerator.as_deref(), accel.as_deref()) {
        if gtk4::accelerator_parse(accel).is_none() {
            return Err(GuiError::InvalidAccelerator(text.to_string()));
        }
    }

    let action = gio::SimpleAction::new(&options.action, None);
    action.connect_activate(move |_, _| on_activate());
    app.add_action(&action);

    let detailed_action = options.detailed_action();
    let item = gio::MenuItem::new(Some(&options.label), Some(&detailed_action));

    if let (Some(accelerator), Some(accel)) = (accelerator, accel) {
        app.set_accels_for_action(&detailed_action, &[accel.as_str()]);
        item.set_attribute_value("accel", Some(&accel.to_variant()));
        log::debug!("Bound {} to {}", accelerator, detailed_action);
    }

    Ok(item)
}

/// Shorthand for [`make_menu_item`] with an accelerator
pub fn menu_item<F>(
    app: &Application,
    label: &str,
    action: &str,
    accelerator: &str,
    on_activate: F,
) -> Result<gio::MenuItem, GuiError>
where
    F: Fn() + 'static,
{
    let options = MenuItemOptions::new(label, action).with_accelerator(accelerator);
    make_menu_item(app, &options, on_activate)
}
