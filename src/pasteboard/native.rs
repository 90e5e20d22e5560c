//! NSPasteboard change counter (macOS)

use cocoa::base::{id, nil};
use cocoa::foundation::NSInteger;
use objc::rc::autoreleasepool;
use objc::{class, msg_send, sel, sel_impl};

use super::backend::PasteboardError;

/// Read `[[NSPasteboard generalPasteboard] changeCount]`
pub fn change_count() -> Result<u64, PasteboardError> {
    autoreleasepool(|| unsafe {
        let pasteboard: id = msg_send![class!(NSPasteboard), generalPasteboard];
        if pasteboard == nil {
            return Err(PasteboardError::Unavailable(
                "Failed to get NSPasteboard".to_string(),
            ));
        }

        let count: NSInteger = msg_send![pasteboard, changeCount];
        Ok(count.max(0) as u64)
    })
}
