/**
 * Remisión Document Renderer
 *
 * Renders a remisión as a single fixed-template PDF (US Letter) with
 * the business letterhead, the remisión metadata, the client block, a
 * columnar line-item table and a totals block. Long item lists flow
 * onto additional pages.
 *
 * # Layout
 *
 * Coordinates are in millimeters with the origin at the bottom-left
 * corner of the page. The table columns are fixed: cantidad,
 * descripción, precio unitario, importe.
 */

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::clientes::model::Cliente;
use crate::error::ApiError;
use crate::remisiones::model::{DetalleConArticulo, Remision};

const EMPRESA_NOMBRE: &str = "COMERCIALIZADORA EL FARO S.A. DE C.V.";
const EMPRESA_DOMICILIO: &str = "Av. Insurgentes Sur 1425, Col. Del Valle, 03100 Ciudad de México, CDMX";
const EMPRESA_RFC: &str = "RFC: CFA980512HN7";
const EMPRESA_TELEFONO: &str = "Tel: (55) 5523 8841";

// US Letter in millimeters.
const PAGE_WIDTH: f32 = 215.9;
const PAGE_HEIGHT: f32 = 279.4;

const MARGIN_LEFT: f32 = 20.0;
const MARGIN_BOTTOM: f32 = 25.0;
const LINE_STEP: f32 = 7.0;

// Table column x positions.
const COL_CANTIDAD: f32 = 20.0;
const COL_DESCRIPCION: f32 = 45.0;
const COL_PRECIO: f32 = 130.0;
const COL_IMPORTE: f32 = 170.0;

/// Line total: unit price times quantity. A missing price or quantity
/// computes as zero rather than failing the document.
pub fn importe_linea(precio: Option<f64>, cantidad: Option<i32>) -> f64 {
    precio.unwrap_or(0.0) * f64::from(cantidad.unwrap_or(0))
}

/// Sum of the line totals.
pub fn subtotal(detalles: &[DetalleConArticulo]) -> f64 {
    detalles
        .iter()
        .map(|d| importe_linea(d.precio, d.cantidad))
        .sum()
}

fn formato_moneda(valor: f64) -> String {
    format!("${valor:.2}")
}

fn write_table_header(layer: &PdfLayerReference, bold: &IndirectFontRef, y: f32) {
    layer.use_text("Cantidad", 10.0, Mm(COL_CANTIDAD), Mm(y), bold);
    layer.use_text("Descripción", 10.0, Mm(COL_DESCRIPCION), Mm(y), bold);
    layer.use_text("Precio unitario", 10.0, Mm(COL_PRECIO), Mm(y), bold);
    layer.use_text("Importe", 10.0, Mm(COL_IMPORTE), Mm(y), bold);
}

/// Render a remisión to PDF bytes.
///
/// # Errors
///
/// Returns `ApiError::Document` when font loading or serialization
/// fails.
pub fn render_remision(
    remision: &Remision,
    cliente: &Cliente,
    detalles: &[DetalleConArticulo],
) -> Result<Vec<u8>, ApiError> {
    let (doc, page, layer) = PdfDocument::new(
        format!("Remisión {}", remision.identificador),
        Mm(PAGE_WIDTH),
        Mm(PAGE_HEIGHT),
        "Capa 1",
    );

    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ApiError::document(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ApiError::document(e.to_string()))?;

    let mut layer = doc.get_page(page).get_layer(layer);

    // Letterhead
    layer.use_text(EMPRESA_NOMBRE, 14.0, Mm(MARGIN_LEFT), Mm(262.0), &bold);
    layer.use_text(EMPRESA_DOMICILIO, 9.0, Mm(MARGIN_LEFT), Mm(255.0), &font);
    layer.use_text(EMPRESA_RFC, 9.0, Mm(MARGIN_LEFT), Mm(250.0), &font);
    layer.use_text(EMPRESA_TELEFONO, 9.0, Mm(MARGIN_LEFT), Mm(245.0), &font);

    // Remisión metadata
    layer.use_text("REMISIÓN", 13.0, Mm(160.0), Mm(262.0), &bold);
    layer.use_text(&remision.identificador, 11.0, Mm(160.0), Mm(255.0), &bold);
    layer.use_text(
        format!("Fecha: {}", remision.fecha.format("%d/%m/%Y")),
        10.0,
        Mm(160.0),
        Mm(250.0),
        &font,
    );

    // Client block
    layer.use_text("Cliente:", 10.0, Mm(MARGIN_LEFT), Mm(232.0), &bold);
    layer.use_text(&cliente.nombre, 10.0, Mm(45.0), Mm(232.0), &font);
    layer.use_text("Domicilio:", 10.0, Mm(MARGIN_LEFT), Mm(226.0), &bold);
    layer.use_text(
        cliente.domicilio.as_deref().unwrap_or(""),
        10.0,
        Mm(45.0),
        Mm(226.0),
        &font,
    );
    layer.use_text("RFC:", 10.0, Mm(MARGIN_LEFT), Mm(220.0), &bold);
    layer.use_text(
        cliente.rfc.as_deref().unwrap_or(""),
        10.0,
        Mm(45.0),
        Mm(220.0),
        &font,
    );

    // Line items
    write_table_header(&layer, &bold, 208.0);
    let mut y = 208.0 - LINE_STEP;

    for detalle in detalles {
        if y < MARGIN_BOTTOM {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Capa 1");
            layer = doc.get_page(next_page).get_layer(next_layer);
            write_table_header(&layer, &bold, 260.0);
            y = 260.0 - LINE_STEP;
        }

        let cantidad = detalle.cantidad.unwrap_or(0);
        let descripcion = detalle.descripcion.as_deref().unwrap_or("");
        let precio = detalle.precio.unwrap_or(0.0);
        let importe = importe_linea(detalle.precio, detalle.cantidad);

        layer.use_text(cantidad.to_string(), 10.0, Mm(COL_CANTIDAD), Mm(y), &font);
        layer.use_text(descripcion, 10.0, Mm(COL_DESCRIPCION), Mm(y), &font);
        layer.use_text(formato_moneda(precio), 10.0, Mm(COL_PRECIO), Mm(y), &font);
        layer.use_text(formato_moneda(importe), 10.0, Mm(COL_IMPORTE), Mm(y), &font);

        y -= LINE_STEP;
    }

    // Totals
    let total_subtotal = subtotal(detalles);
    let mut y_totales = y - 6.0;
    if y_totales < MARGIN_BOTTOM {
        let (next_page, next_layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Capa 1");
        layer = doc.get_page(next_page).get_layer(next_layer);
        y_totales = 260.0;
    }

    layer.use_text("Subtotal:", 10.0, Mm(COL_PRECIO), Mm(y_totales), &bold);
    layer.use_text(
        formato_moneda(total_subtotal),
        10.0,
        Mm(COL_IMPORTE),
        Mm(y_totales),
        &font,
    );
    layer.use_text("IVA:", 10.0, Mm(COL_PRECIO), Mm(y_totales - 6.0), &bold);
    layer.use_text(
        formato_moneda(0.0),
        10.0,
        Mm(COL_IMPORTE),
        Mm(y_totales - 6.0),
        &font,
    );
    layer.use_text("Total:", 10.0, Mm(COL_PRECIO), Mm(y_totales - 12.0), &bold);
    layer.use_text(
        formato_moneda(total_subtotal),
        10.0,
        Mm(COL_IMPORTE),
        Mm(y_totales - 12.0),
        &bold,
    );

    doc.save_to_bytes()
        .map_err(|e| ApiError::document(e.to_string()))
}
