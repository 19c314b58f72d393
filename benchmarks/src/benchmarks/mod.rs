pub mod decode;
pub mod export;

use layoutlua_core::{Item, Layout};

/// Grid of labelled buttons, every optional property set
pub fn sample_layout(count: usize) -> Layout {
    let items = (0..count)
        .map(|i| {
            let mut item = Item::new("TextButton", &format!("Button {}", i))
                .with_bounds((i % 20) as f64 * 48.0, (i / 20) as f64 * 32.0, 44.0, 28.0);
            item.fill = Some("#3a3a3a".to_string());
            item.text = Some(format!("#{}", i));
            item.text_color = Some("#fafafa".to_string());
            item.font_size = Some(12.0);
            item.image_id = Some("rbxassetid://0".to_string());
            item
        })
        .collect();
    Layout { canvas_size: None, items }
}
