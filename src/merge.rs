use std::collections::BTreeMap;

use lopdf::{Document, Object, ObjectId};

use crate::{Result, SplitError};

/// Combine two or more PDFs into a single document, pages in input order.
///
/// Each source's objects are renumbered into one shared id space, the page
/// objects are re-parented under a single rebuilt `Pages` tree, and one
/// catalog is kept. Outlines are dropped: their destinations would point
/// into the pre-merge page numbering.
pub fn merge_documents(sources: Vec<Document>) -> Result<Document> {
    if sources.len() < 2 {
        return Err(SplitError::Merge(format!(
            "need at least 2 documents, got {}",
            sources.len()
        )));
    }

    let mut max_id = 1;
    let mut page_objects: Vec<(ObjectId, Object)> = Vec::new();
    let mut all_objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for mut source in sources {
        source.renumber_objects_with(max_id);
        max_id = source.max_id + 1;

        // get_pages is keyed by page number, so iteration preserves the
        // source's own page order.
        for (_, page_id) in source.get_pages() {
            let object = source
                .get_object(page_id)
                .map_err(|e| SplitError::Merge(format!("unreadable page object: {e}")))?;
            page_objects.push((page_id, object.to_owned()));
        }

        all_objects.extend(source.objects);
    }

    let mut merged = Document::with_version("1.5");
    let mut catalog: Option<(ObjectId, Object)> = None;
    let mut page_tree: Option<(ObjectId, Object)> = None;

    for (object_id, object) in all_objects {
        let kind = dict_type(&object).to_vec();
        match kind.as_slice() {
            b"Catalog" => {
                if catalog.is_none() {
                    catalog = Some((object_id, object));
                }
            }
            b"Pages" => {
                // Fold every source's Pages attributes (inheritable entries
                // like /MediaBox or /Resources) into one dictionary, keyed
                // by the first Pages id seen.
                if let Ok(dict) = object.as_dict() {
                    let mut dict = dict.clone();
                    if let Some((_, ref existing)) = page_tree {
                        if let Ok(existing_dict) = existing.as_dict() {
                            dict.extend(existing_dict);
                        }
                    }
                    let id = page_tree.as_ref().map(|(id, _)| *id).unwrap_or(object_id);
                    page_tree = Some((id, Object::Dictionary(dict)));
                }
            }
            // Pages are re-inserted below with a fixed parent; outlines
            // reference the old page numbering and are dropped.
            b"Page" | b"Outlines" | b"Outline" => {}
            _ => {
                merged.objects.insert(object_id, object);
            }
        }
    }

    let (pages_id, pages_object) =
        page_tree.ok_or_else(|| SplitError::Merge("no page tree found".into()))?;
    let (catalog_id, catalog_object) =
        catalog.ok_or_else(|| SplitError::Merge("no catalog found".into()))?;

    for (page_id, object) in &page_objects {
        if let Ok(dict) = object.as_dict() {
            let mut dict = dict.clone();
            dict.set("Parent", Object::Reference(pages_id));
            merged.objects.insert(*page_id, Object::Dictionary(dict));
        }
    }

    if let Ok(dict) = pages_object.as_dict() {
        let mut dict = dict.clone();
        dict.set("Count", page_objects.len() as i64);
        dict.set(
            "Kids",
            page_objects
                .iter()
                .map(|(id, _)| Object::Reference(*id))
                .collect::<Vec<_>>(),
        );
        merged.objects.insert(pages_id, Object::Dictionary(dict));
    }

    if let Ok(dict) = catalog_object.as_dict() {
        let mut dict = dict.clone();
        dict.set("Pages", Object::Reference(pages_id));
        dict.remove(b"Outlines");
        merged.objects.insert(catalog_id, Object::Dictionary(dict));
    }

    merged.trailer.set("Root", Object::Reference(catalog_id));
    merged.max_id = merged.objects.len() as u32;
    merged.renumber_objects();
    merged.compress();

    Ok(merged)
}

/// Byte-level wrapper around [`merge_documents`]: load every input, merge,
/// serialize. Unloadable input surfaces as [`SplitError::SourceLoad`].
pub fn merge_bytes(sources: &[Vec<u8>]) -> Result<Vec<u8>> {
    let mut documents = Vec::with_capacity(sources.len());
    for bytes in sources {
        documents
            .push(Document::load_mem(bytes).map_err(|e| SplitError::SourceLoad(e.to_string()))?);
    }

    let mut merged = merge_documents(documents)?;
    let mut buffer = Vec::new();
    merged.save_to(&mut buffer)?;
    Ok(buffer)
}

/// The /Type name of a dictionary object, or `b""` for anything else
/// (streams, arrays, untyped dictionaries).
fn dict_type(object: &Object) -> &[u8] {
    object
        .as_dict()
        .ok()
        .and_then(|dict| dict.get(b"Type").ok())
        .and_then(|value| value.as_name().ok())
        .unwrap_or(b"")
}
