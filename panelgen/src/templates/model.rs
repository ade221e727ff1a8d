//! Per-model templates

/// Zod schema and form value type
pub const MODEL_SCHEMA: &str = r#"import * as z from "zod";

export const {{model_camel}}Schema = z.object({
{{#each form_fields}}
  {{ident}}: {{zod}},
{{/each}}
});

// Create-only fields are optional when editing
export const {{model_camel}}EditSchema = {{model_camel}}Schema{{#if create_only_fields}}.partial({
{{#each create_only_fields}}
  {{this}}: true,
{{/each}}
}){{/if}};

export type {{component_name}}FormValues = z.infer<typeof {{model_camel}}Schema>;

export const {{model_camel}}DefaultValues: Partial<{{component_name}}FormValues> = {
{{#each form_fields}}
  {{ident}}: {{default_value}},
{{/each}}
};
"#;

/// Create/edit form
pub const MODEL_FORM: &str = r#"import * as React from "react";
import { useForm, type Resolver } from "react-hook-form";
import { zodResolver } from "@hookform/resolvers/zod";
import { useNavigate, useParams } from "react-router-dom";
import { Button } from "@/components/ui/button";
import {
  Form,
  FormControl,
  FormDescription,
  FormField,
  FormItem,
  FormLabel,
  FormMessage,
} from "@/components/ui/form";
import { Input } from "@/components/ui/input";
import { Textarea } from "@/components/ui/textarea";
import { Select, SelectContent, SelectItem, SelectTrigger, SelectValue } from "@/components/ui/select";
import { RadioGroup, RadioGroupItem } from "@/components/ui/radio-group";
import { Checkbox } from "@/components/ui/checkbox";
import { Switch } from "@/components/ui/switch";
import { useAppDispatch } from "@/store/hooks";
import {
  create{{component_name}},
  fetch{{component_name}}ById,
  update{{component_name}},
} from "@/store/slices/{{slice_name}}Slice";
import {
  {{model_camel}}DefaultValues,
  {{model_camel}}EditSchema,
  {{model_camel}}Schema,
  type {{component_name}}FormValues,
} from "./{{component_name}}Schema";

interface {{component_name}}FormProps {
  id?: string;
  onSuccess?: () => void;
}

export function {{component_name}}Form({ id, onSuccess }: {{component_name}}FormProps) {
  const params = useParams<{ id: string }>();
  const recordId = id ?? params.id;
  const isEdit = Boolean(recordId);
  const navigate = useNavigate();
  const dispatch = useAppDispatch();

  const form = useForm<{{component_name}}FormValues>({
    resolver: zodResolver(
      isEdit ? {{model_camel}}EditSchema : {{model_camel}}Schema,
    ) as Resolver<{{component_name}}FormValues>,
    defaultValues: {{model_camel}}DefaultValues,
  });

  React.useEffect(() => {
    if (!recordId) return;
    dispatch(fetch{{component_name}}ById(recordId))
      .unwrap()
      .then((record) => form.reset(record))
      .catch((error) => console.error("Failed to load {{title}}:", error));
  }, [recordId, dispatch, form]);

  const close = () => {
    if (onSuccess) {
      onSuccess();
    } else {
      navigate("{{list_path}}");
    }
  };

  async function onSubmit(values: {{component_name}}FormValues) {
    try {
      if (isEdit && recordId) {
        await dispatch(update{{component_name}}({ id: recordId, data: values })).unwrap();
      } else {
        await dispatch(create{{component_name}}(values)).unwrap();
      }
      close();
    } catch (error) {
      console.error("Failed to save {{title}}:", error);
    }
  }

  return (
    <div className="w-full bg-card border rounded-xl shadow-sm">
      <div className="p-6 md:p-8 border-b">
        <h1 className="text-2xl font-bold text-foreground">
          {isEdit ? "Edit {{title}}" : "Create {{title}}"}
        </h1>
      </div>
      <Form {...form}>
        <form onSubmit={form.handleSubmit(onSubmit)} className="p-6 md:p-8 space-y-8">
          <div className="grid grid-cols-1 md:grid-cols-2 gap-6">
{{#each form_fields}}
{{#if is_remove_in_edit_form}}
            {!isEdit && (
{{/if}}
            <FormField
              control={form.control}
              name="{{ident}}"
              render={({ field }) => (
                <FormItem>
                  <FormLabel>{{label}}</FormLabel>
                  <FormControl>
{{#if is_textarea}}
                    <Textarea placeholder="{{placeholder}}" {...field} />
{{else if is_select}}
                    <Select onValueChange={field.onChange} value={field.value}>
                      <SelectTrigger className="w-full">
                        <SelectValue placeholder="Select an option" />
                      </SelectTrigger>
                      <SelectContent>
{{#each options}}
                        <SelectItem value="{{this}}">{{this}}</SelectItem>
{{/each}}
                      </SelectContent>
                    </Select>
{{else if is_radio}}
                    <RadioGroup onValueChange={field.onChange} value={field.value} className="flex gap-4 pt-2">
{{#each options}}
                      <label className="flex items-center gap-2 text-sm">
                        <RadioGroupItem value="{{this}}" /> {{this}}
                      </label>
{{/each}}
                    </RadioGroup>
{{else if is_checkbox}}
                    <div className="h-10 flex items-center">
                      <Checkbox checked={field.value} onCheckedChange={field.onChange} />
                    </div>
{{else if is_switch}}
                    <div className="h-10 flex items-center">
                      <Switch checked={field.value} onCheckedChange={field.onChange} />
                    </div>
{{else if is_file}}
                    <Input type="file" onChange={(e) => field.onChange(e.target.files?.[0])} />
{{else if is_color}}
                    <Input type="color" className="h-10 w-24 p-1" {...field} />
{{else if is_datepicker}}
                    <Input
                      type="date"
                      value={field.value ? new Date(field.value).toISOString().slice(0, 10) : ""}
                      onChange={(e) => field.onChange(e.target.value)}
                    />
{{else if is_number}}
                    <Input type="number" placeholder="{{placeholder}}" {...field} />
{{else}}
                    <Input placeholder="{{placeholder}}" {...field} />
{{/if}}
                  </FormControl>
{{#if description}}
                  <FormDescription>{{description}}</FormDescription>
{{/if}}
                  <FormMessage />
                </FormItem>
              )}
            />
{{#if is_remove_in_edit_form}}
            )}
{{/if}}
{{/each}}
          </div>
          <div className="flex justify-center md:justify-end gap-2 pt-8">
            <Button type="button" variant="outline" onClick={close}>
              Cancel
            </Button>
            <Button type="submit" size="lg" disabled={form.formState.isSubmitting}>
              Save Changes
            </Button>
          </div>
        </form>
      </Form>
    </div>
  );
}
"#;

/// Listing page with mock data, row actions and delete confirmation
pub const MODEL_DATA_TABLE: &str = r#"import * as React from "react";
import {
  flexRender,
  getCoreRowModel,
  getFilteredRowModel,
  getPaginationRowModel,
  getSortedRowModel,
  useReactTable,
  type ColumnDef,
  type ColumnFiltersState,
  type Row,
  type SortingState,
} from "@tanstack/react-table";
import { ArrowUpDown, ChevronLeft, ChevronRight, Eye, Pencil, Plus, Trash2 } from "lucide-react";
{{#unless is_popup}}
import { Link } from "react-router-dom";
{{/unless}}
import { Input } from "@/components/ui/input";
import { Button } from "@/components/ui/button";
import { Checkbox } from "@/components/ui/checkbox";
import { Table, TableBody, TableCell, TableHead, TableHeader, TableRow } from "@/components/ui/table";
import { Select, SelectContent, SelectItem, SelectTrigger, SelectValue } from "@/components/ui/select";
import { Dialog, DialogContent, DialogFooter, DialogHeader, DialogTitle } from "@/components/ui/dialog";
import {
  AlertDialog,
  AlertDialogAction,
  AlertDialogCancel,
  AlertDialogContent,
  AlertDialogDescription,
  AlertDialogFooter,
  AlertDialogHeader,
  AlertDialogTitle,
} from "@/components/ui/alert-dialog";
import { useAppDispatch, useAppSelector } from "@/store/hooks";
import {
  delete{{component_name}},
  fetch{{component_name}}List,
  selectAll{{component_name}},
  select{{component_name}}Status,
} from "@/store/slices/{{slice_name}}Slice";
{{#if is_popup}}
import { {{component_name}}Form } from "@/components/forms/{{component_name}}/{{component_name}}Form";
{{/if}}

export type {{component_name}} = {
  id: number | string;
{{#each fields}}
{{#unless is_id}}
  {{ident}}: {{ts_type}};
{{/unless}}
{{/each}}
};

const mockData: {{component_name}}[] = {{json sample_rows}};

export function {{component_name}}DataTable() {
  const dispatch = useAppDispatch();
  const records = useAppSelector(selectAll{{component_name}});
  const status = useAppSelector(select{{component_name}}Status);

  const [data, setData] = React.useState<{{component_name}}[]>(mockData);
  const [sorting, setSorting] = React.useState<SortingState>([]);
  const [columnFilters, setColumnFilters] = React.useState<ColumnFiltersState>([]);
  const [rowSelection, setRowSelection] = React.useState({});
  const [viewingRow, setViewingRow] = React.useState<{{component_name}} | null>(null);
  const [isAlertOpen, setIsAlertOpen] = React.useState(false);
  const [itemToDelete, setItemToDelete] = React.useState<null | number | string | (number | string)[]>(null);
{{#if is_popup}}
  const [isFormOpen, setIsFormOpen] = React.useState(false);
  const [editingId, setEditingId] = React.useState<string | undefined>(undefined);

  const openForm = (id?: number | string) => {
    setEditingId(id === undefined ? undefined : String(id));
    setIsFormOpen(true);
  };

  const closeForm = () => {
    setIsFormOpen(false);
    setEditingId(undefined);
    dispatch(fetch{{component_name}}List());
  };
{{/if}}

  React.useEffect(() => {
    dispatch(fetch{{component_name}}List());
  }, [dispatch]);

  React.useEffect(() => {
    if (status === "succeeded") {
      setData(records as {{component_name}}[]);
    }
  }, [status, records]);

  const handleDeleteRow = (id: number | string) => {
    setItemToDelete(id);
    setIsAlertOpen(true);
  };

  const handleDeleteSelected = () => {
    const selectedIds = table.getFilteredSelectedRowModel().rows.map((row) => row.original.id);
    setItemToDelete(selectedIds);
    setIsAlertOpen(true);
  };

  const confirmDelete = () => {
    if (itemToDelete === null) return;

    const ids = new Set(Array.isArray(itemToDelete) ? itemToDelete : [itemToDelete]);
    ids.forEach((id) => dispatch(delete{{component_name}}(id)));
    setData((current) => current.filter((item) => !ids.has(item.id)));
    table.resetRowSelection();

    setIsAlertOpen(false);
    setItemToDelete(null);
  };

  const columns: ColumnDef<{{component_name}}>[] = React.useMemo(
    () => [
      {
        id: "select",
        header: ({ table }) => (
          <Checkbox
            checked={table.getIsAllPageRowsSelected()}
            onCheckedChange={(value) => table.toggleAllPageRowsSelected(!!value)}
            aria-label="Select all"
          />
        ),
        cell: ({ row }) => (
          <Checkbox
            checked={row.getIsSelected()}
            onCheckedChange={(value) => row.toggleSelected(!!value)}
            aria-label="Select row"
          />
        ),
        enableSorting: false,
      },
      { accessorKey: "id", header: "ID" },
{{#each listing_fields}}
      { accessorKey: "{{ident}}", header: "{{label}}", enableSorting: {{sortable}} },
{{/each}}
      {
        id: "actions",
        header: () => <div className="text-right">Actions</div>,
        cell: ({ row }) => (
          <div className="flex items-center justify-end gap-1">
            <Button variant="ghost" size="icon" title="View" onClick={() => setViewingRow(row.original)}>
              <Eye className="h-4 w-4" />
            </Button>
{{#if is_popup}}
            <Button variant="ghost" size="icon" title="Edit" onClick={() => openForm(row.original.id)}>
              <Pencil className="h-4 w-4" />
            </Button>
{{else}}
            <Button asChild variant="ghost" size="icon" title="Edit">
              <Link to={`{{edit_path}}/${row.original.id}`}>
                <Pencil className="h-4 w-4" />
              </Link>
            </Button>
{{/if}}
            <Button
              variant="ghost"
              size="icon"
              title="Delete"
              className="text-red-600 hover:text-red-500"
              onClick={() => handleDeleteRow(row.original.id)}
            >
              <Trash2 className="h-4 w-4" />
            </Button>
          </div>
        ),
      },
    ],
    [],
  );

  const table = useReactTable({
    data,
    columns,
    onSortingChange: setSorting,
    onColumnFiltersChange: setColumnFilters,
    onRowSelectionChange: setRowSelection,
    getCoreRowModel: getCoreRowModel(),
    getPaginationRowModel: getPaginationRowModel(),
    getSortedRowModel: getSortedRowModel(),
    getFilteredRowModel: getFilteredRowModel(),
    state: { sorting, columnFilters, rowSelection },
  });

  const renderCard = (row: Row<{{component_name}}>) => (
    <div key={row.id} className="border rounded-lg p-4 mb-4 bg-card shadow-sm">
      <div className="flex justify-between items-center mb-3">
        <div className="font-semibold text-lg">{String(row.original.{{primary_field.ident}} ?? "")}</div>
        <Button variant="ghost" size="icon" title="View" onClick={() => setViewingRow(row.original)}>
          <Eye className="h-4 w-4" />
        </Button>
      </div>
      <div className="space-y-2 text-sm">
{{#each listing_fields}}
        <div className="flex justify-between">
          <span className="text-muted-foreground font-medium">{{label}}</span>
          <span>{String(row.original.{{ident}} ?? "")}</span>
        </div>
{{/each}}
      </div>
    </div>
  );

  const pageIndex = table.getState().pagination.pageIndex;
  const pageSize = table.getState().pagination.pageSize;
  const totalRows = table.getFilteredRowModel().rows.length;
  const pageStart = pageIndex * pageSize + 1;
  const pageEnd = Math.min(pageStart + pageSize - 1, totalRows);
  const selectedCount = table.getFilteredSelectedRowModel().rows.length;

  return (
    <>
      <div className="w-full rounded-xl border bg-card shadow-sm p-4 md:p-6">
        <div className="flex flex-col md:flex-row items-center justify-between gap-4 py-4">
          <h2 className="text-xl font-semibold">{{plural_title}}</h2>
          <Input
            placeholder="Filter by {{primary_field.label}}..."
            value={(table.getColumn("{{primary_field.ident}}")?.getFilterValue() as string) ?? ""}
            onChange={(e) => table.getColumn("{{primary_field.ident}}")?.setFilterValue(e.target.value)}
            className="w-full md:max-w-sm"
          />
          <div className="flex items-center gap-2">
            {selectedCount > 0 && (
              <Button variant="destructive" size="sm" onClick={handleDeleteSelected}>
                Delete ({selectedCount})
              </Button>
            )}
{{#if is_popup}}
            <Button size="sm" onClick={() => openForm()}>
              <Plus className="h-4 w-4 mr-2" /> New
            </Button>
{{else}}
            <Button asChild size="sm">
              <Link to="{{create_path}}">
                <Plus className="h-4 w-4 mr-2" /> New
              </Link>
            </Button>
{{/if}}
          </div>
        </div>

        <div className="hidden md:block rounded-md border">
          <Table>
            <TableHeader>
              {table.getHeaderGroups().map((headerGroup) => (
                <TableRow key={headerGroup.id}>
                  {headerGroup.headers.map((header) => (
                    <TableHead key={header.id}>
                      {header.isPlaceholder ? null : header.column.getCanSort() ? (
                        <Button
                          variant="ghost"
                          onClick={() => header.column.toggleSorting(header.column.getIsSorted() === "asc")}
                        >
                          {flexRender(header.column.columnDef.header, header.getContext())}
                          <ArrowUpDown className="ml-2 h-4 w-4" />
                        </Button>
                      ) : (
                        flexRender(header.column.columnDef.header, header.getContext())
                      )}
                    </TableHead>
                  ))}
                </TableRow>
              ))}
            </TableHeader>
            <TableBody>
              {table.getRowModel().rows.length ? (
                table.getRowModel().rows.map((row) => (
                  <TableRow key={row.id} data-state={row.getIsSelected() && "selected"}>
                    {row.getVisibleCells().map((cell) => (
                      <TableCell key={cell.id}>{flexRender(cell.column.columnDef.cell, cell.getContext())}</TableCell>
                    ))}
                  </TableRow>
                ))
              ) : (
                <TableRow>
                  <TableCell colSpan={columns.length} className="h-24 text-center">
                    No results.
                  </TableCell>
                </TableRow>
              )}
            </TableBody>
          </Table>
        </div>

        <div className="block md:hidden">
          {table.getRowModel().rows.length ? (
            table.getRowModel().rows.map(renderCard)
          ) : (
            <div className="text-center border rounded-md p-8">No results.</div>
          )}
        </div>

        <div className="flex items-center justify-between space-x-4 py-4">
          <div className="flex items-center gap-2">
            <Select value={`${pageSize}`} onValueChange={(value) => table.setPageSize(Number(value))}>
              <SelectTrigger className="w-[75px]">
                <SelectValue placeholder={pageSize} />
              </SelectTrigger>
              <SelectContent>
                {[10, 20, 30, 40, 50].map((size) => (
                  <SelectItem key={size} value={`${size}`}>
                    {size}
                  </SelectItem>
                ))}
              </SelectContent>
            </Select>
            <p className="text-sm text-muted-foreground hidden sm:inline-block">Records per page</p>
          </div>

          <div className="flex-1 text-center text-sm text-muted-foreground">
            Showing {totalRows > 0 ? pageStart : 0} to {pageEnd} of {totalRows} Results
          </div>

          <div className="flex items-center gap-2">
            <Button variant="outline" size="icon" onClick={() => table.previousPage()} disabled={!table.getCanPreviousPage()}>
              <ChevronLeft className="h-4 w-4" />
            </Button>
            <Button variant="outline" size="icon" onClick={() => table.nextPage()} disabled={!table.getCanNextPage()}>
              <ChevronRight className="h-4 w-4" />
            </Button>
          </div>
        </div>
      </div>

      <Dialog open={viewingRow !== null} onOpenChange={(isOpen) => !isOpen && setViewingRow(null)}>
        <DialogContent className="sm:max-w-md p-0">
          <DialogHeader className="p-6 pb-4">
            <DialogTitle>{{title}} Details</DialogTitle>
          </DialogHeader>
          <div className="border-y">
            {viewingRow && (
              <div className="grid auto-rows-min gap-y-4 p-6">
                <div className="grid grid-cols-2 items-start gap-x-4">
                  <span className="text-muted-foreground">ID</span>
                  <p className="text-foreground font-medium break-words">{String(viewingRow.id)}</p>
                </div>
{{#each fields}}
{{#unless is_id}}
                <div className="grid grid-cols-2 items-start gap-x-4">
                  <span className="text-muted-foreground">{{label}}</span>
                  <p className="text-foreground font-medium break-words">{String(viewingRow.{{ident}} ?? "")}</p>
                </div>
{{/unless}}
{{/each}}
              </div>
            )}
          </div>
          <DialogFooter className="sm:justify-end gap-2 p-6 pt-4">
            <Button variant="outline" onClick={() => setViewingRow(null)}>
              Cancel
            </Button>
{{#if is_popup}}
            <Button
              onClick={() => {
                if (viewingRow) openForm(viewingRow.id);
                setViewingRow(null);
              }}
            >
              <Pencil className="mr-2 h-4 w-4" /> Edit
            </Button>
{{else}}
            <Button asChild>
              <Link to={`{{edit_path}}/${viewingRow?.id}`}>
                <Pencil className="mr-2 h-4 w-4" /> Edit
              </Link>
            </Button>
{{/if}}
          </DialogFooter>
        </DialogContent>
      </Dialog>
{{#if is_popup}}

      <Dialog open={isFormOpen} onOpenChange={(isOpen) => !isOpen && closeForm()}>
        <DialogContent className="sm:max-w-3xl p-0">
          <{{component_name}}Form id={editingId} onSuccess={closeForm} />
        </DialogContent>
      </Dialog>
{{/if}}

      <AlertDialog open={isAlertOpen} onOpenChange={setIsAlertOpen}>
        <AlertDialogContent>
          <AlertDialogHeader>
            <AlertDialogTitle>Are you absolutely sure?</AlertDialogTitle>
            <AlertDialogDescription>
              This action cannot be undone. This will permanently delete the selected record(s) from the server.
            </AlertDialogDescription>
          </AlertDialogHeader>
          <AlertDialogFooter>
            <AlertDialogCancel onClick={() => setItemToDelete(null)}>Cancel</AlertDialogCancel>
            <AlertDialogAction onClick={confirmDelete}>Continue</AlertDialogAction>
          </AlertDialogFooter>
        </AlertDialogContent>
      </AlertDialog>
    </>
  );
}
"#;

/// Redux Toolkit slice with CRUD thunks
pub const MODEL_SLICE: &str = r#"import { createSelector, createSlice } from "@reduxjs/toolkit";
import api from "@/lib/api";
import type { {{component_name}}FormValues } from "@/components/forms/{{component_name}}/{{component_name}}Schema";
import { createApiThunk } from "../thunks/apiThunk";
import type { RootState } from "../store";

export type {{component_name}}Record = {{component_name}}FormValues & { id: number | string };

interface {{component_name}}State {
  items: {{component_name}}Record[];
  current: {{component_name}}Record | null;
  status: "idle" | "loading" | "succeeded" | "failed";
  error: string | null;
}

const initialState: {{component_name}}State = {
  items: [],
  current: null,
  status: "idle",
  error: null,
};

const errorMessage = (payload: unknown) =>
  (payload as { message?: string } | undefined)?.message ?? "Request failed";

export const fetch{{component_name}}List = createApiThunk<{{component_name}}Record[], void>(
  "{{model_plural_camel}}/fetchAll",
  () => api.get("{{api_path}}"),
);

export const fetch{{component_name}}ById = createApiThunk<{{component_name}}Record, string>(
  "{{model_plural_camel}}/fetchById",
  (id) => api.get(`{{api_path}}/${id}`),
);

export const create{{component_name}} = createApiThunk<{{component_name}}Record, {{component_name}}FormValues>(
  "{{model_plural_camel}}/create",
  (data) => api.post("{{api_path}}", data),
);

export const update{{component_name}} = createApiThunk<
  {{component_name}}Record,
  { id: string; data: {{component_name}}FormValues }
>("{{model_plural_camel}}/update", ({ id, data }) => api.put(`{{api_path}}/${id}`, data));

export const delete{{component_name}} = createApiThunk<number | string, number | string>(
  "{{model_plural_camel}}/delete",
  (id) => api.delete(`{{api_path}}/${id}`).then(() => ({ data: id })),
);

const {{slice_name}}Slice = createSlice({
  name: "{{model_plural_camel}}",
  initialState,
  reducers: {},
  extraReducers: (builder) => {
    builder
      .addCase(fetch{{component_name}}List.pending, (state) => {
        state.status = "loading";
      })
      .addCase(fetch{{component_name}}List.fulfilled, (state, action) => {
        state.status = "succeeded";
        state.items = action.payload;
      })
      .addCase(fetch{{component_name}}List.rejected, (state, action) => {
        state.status = "failed";
        state.error = errorMessage(action.payload);
      })
      .addCase(fetch{{component_name}}ById.fulfilled, (state, action) => {
        state.current = action.payload;
      })
      .addCase(create{{component_name}}.fulfilled, (state, action) => {
        state.items.push(action.payload);
      })
      .addCase(update{{component_name}}.fulfilled, (state, action) => {
        const index = state.items.findIndex((item) => item.id === action.payload.id);
        if (index !== -1) state.items[index] = action.payload;
      })
      .addCase(delete{{component_name}}.fulfilled, (state, action) => {
        state.items = state.items.filter((item) => item.id !== action.payload);
      });
  },
});

const select{{component_name}}State = (state: RootState) => state.{{slice_name}};

export const selectAll{{component_name}} = createSelector(
  [select{{component_name}}State],
  (slice) => slice.items,
);

export const select{{component_name}}Status = createSelector(
  [select{{component_name}}State],
  (slice) => slice.status,
);

export const select{{component_name}}Error = createSelector(
  [select{{component_name}}State],
  (slice) => slice.error,
);

export default {{slice_name}}Slice.reducer;
"#;
