pub mod get_annict_info;
