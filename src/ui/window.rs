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

//! Window setup helpers

use gtk4::prelude::*;
use gtk4::Window;

use crate::core::options::{CloseBehavior, FrameOptions};

/// Apply size, resizability and close behaviour, then show the window
///
/// The size is a default size: GTK only uses it when the window is
/// first mapped. Calling this on a window that is already visible does
/// not resize it; the other options still apply.
pub fn set_up_window<W: IsA<Window>>(window: &W, options: &FrameOptions) {
    let window = window.upcast_ref::<Window>();

    window.set_default_size(options.width, options.height);
    window.set_resizable(options.resizable);
    apply_close_behavior(window, options.close);

    window.present();
}

/// Sized window that quits the application on close and can be resized
pub fn set_up_window_sized<W: IsA<Window>>(window: &W, width: i32, height: i32) {
    set_up_window(window, &FrameOptions::new(width, height));
}

fn apply_close_behavior(window: &Window, close: CloseBehavior) {
    window.set_hide_on_close(close == CloseBehavior::Hide);

    match close {
        CloseBehavior::Quit => {
            window.connect_close_request(|window| {
                if let Some(app) = window.application() {
                    log::debug!("Window closed, quitting application");
                    app.quit();
                }
                glib::Propagation::Proceed
            });
        }
        CloseBehavior::Ignore => {
            window.connect_close_request(|_| glib::Propagation::Stop);
        }
        CloseBehavior::Hide | CloseBehavior::Destroy => {}
    }
}

/// Raise a window above the others
///
/// Minimises it and presents it again; the compositor treats the
/// re-presented window as newly activated.
pub fn bring_to_front<W: IsA<Window>>(window: &W) {
    let window = window.upcast_ref::<Window>();
    let maximized = window.is_maximized();

    window.minimize();
    window.present();

    if maximized {
        window.maximize();
    }
}
