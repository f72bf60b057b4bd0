//! printpdf backend: turns accumulated label records into a paginated
//! PDF document. Text uses the PDF built-in fonts; QR images are read
//! back from disk and embedded as raw RGB bitmaps.

use super::draw::{DrawPrimitive, FontKind};
use super::SheetSpec;
use crate::error::{LabelError, Result};
use crate::model::LabelRecord;
use printpdf::{
    BuiltinFont, ColorBits, ColorSpace, Image, ImageTransform, ImageXObject, Mm, PdfDocument,
    PdfLayerReference, Px,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

const MM_PER_PT: f32 = 25.4 / 72.0;

fn pt_to_mm(pt: f32) -> f32 {
    pt * MM_PER_PT
}

pub(super) fn write_pdf(
    spec: &SheetSpec,
    records: &[LabelRecord],
    owner_line: &str,
    path: &Path,
) -> Result<()> {
    let title = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("labels");
    let (doc, first_page, first_layer) = PdfDocument::new(
        title,
        Mm(spec.page_width),
        Mm(spec.page_height),
        "labels",
    );

    let mono = doc
        .add_builtin_font(BuiltinFont::Courier)
        .map_err(|e| LabelError::Pdf(e.to_string()))?;
    let sans = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| LabelError::Pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    let capacity = spec.capacity();
    let cell_width_pt = spec.label_width / MM_PER_PT;
    let cell_height_pt = spec.label_height / MM_PER_PT;

    for (index, record) in records.iter().enumerate() {
        let slot = index % capacity;
        if index > 0 && slot == 0 {
            let (page, page_layer) =
                doc.add_page(Mm(spec.page_width), Mm(spec.page_height), "labels");
            layer = doc.get_page(page).get_layer(page_layer);
        }

        let (cell_x, cell_y) = spec.cell_origin(slot);
        for primitive in (spec.drawer)(record, cell_width_pt, cell_height_pt, owner_line) {
            match primitive {
                DrawPrimitive::Text {
                    x,
                    y,
                    size,
                    font,
                    content,
                } => {
                    let font = match font {
                        FontKind::Mono => &mono,
                        FontKind::Sans => &sans,
                    };
                    layer.use_text(
                        content,
                        size,
                        Mm(cell_x + pt_to_mm(x)),
                        Mm(cell_y + pt_to_mm(y)),
                        font,
                    );
                }
                DrawPrimitive::Image {
                    x,
                    y,
                    width,
                    height: _,
                    path,
                } => {
                    // QR images are square; a single width-derived DPI
                    // scales both axes.
                    embed_png(
                        &layer,
                        &path,
                        cell_x + pt_to_mm(x),
                        cell_y + pt_to_mm(y),
                        pt_to_mm(width),
                    )?;
                }
            }
        }
    }

    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    doc.save(&mut writer)
        .map_err(|e| LabelError::Pdf(e.to_string()))?;

    Ok(())
}

fn embed_png(
    layer: &PdfLayerReference,
    path: &Path,
    x_mm: f32,
    y_mm: f32,
    width_mm: f32,
) -> Result<()> {
    let img = image::open(path)
        .map_err(|e| LabelError::Image(format!("{}: {}", path.display(), e)))?;
    let rgb = img.to_rgb8();
    let (width_px, height_px) = rgb.dimensions();

    let xobject = ImageXObject {
        width: Px(width_px as usize),
        height: Px(height_px as usize),
        color_space: ColorSpace::Rgb,
        bits_per_component: ColorBits::Bit8,
        interpolate: false,
        image_data: rgb.into_raw(),
        image_filter: None,
        clipping_bbox: None,
        smask: None,
    };

    // DPI that maps the bitmap onto the requested physical width
    let dpi = width_px as f32 / (width_mm / 25.4);

    Image::from(xobject).add_to_layer(
        layer.clone(),
        ImageTransform {
            translate_x: Some(Mm(x_mm)),
            translate_y: Some(Mm(y_mm)),
            dpi: Some(dpi),
            ..Default::default()
        },
    );

    Ok(())
}
